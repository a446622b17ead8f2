//! Text rendering of a histogram as a bar chart, one line per bucket:
//!
//! ```text
//! 0.1-0.2  5%   ▋       1
//! 0.2-0.3  25%  ██▊     5
//! 0.3-0.4  0%   ▏       0
//! ```
//!
//! The columns are the bucket bounds, the share of all samples which fell
//! into the bucket, a bar scaled with the provided `Scale` and the count.

use crate::{Histogram, Scale};

use std::io::{self, Write};
use std::time::Duration;

const FULL: char = '█';

// partial blocks, in eighths
const PARTIAL: [char; 7] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];

// beyond this an f64 has no more precision to show
const MAX_DECIMALS: f64 = 17.0;

/// Writes the histogram labelling the bucket bounds with enough decimals to
/// tell neighbouring bounds apart, see `decimals`.
pub fn write<W: Write, S: Scale + ?Sized>(
    w: &mut W,
    histogram: &Histogram,
    scale: &S,
) -> io::Result<()> {
    let decimals = decimals(histogram);
    write_with(w, histogram, scale, |value| fixed(value, decimals))
}

/// Writes the histogram labelling the bucket bounds with `format`.
pub fn write_with<W, S, F>(w: &mut W, histogram: &Histogram, scale: &S, format: F) -> io::Result<()>
where
    W: Write,
    S: Scale + ?Sized,
    F: Fn(f64) -> String,
{
    let rows: Vec<[String; 4]> = histogram
        .iter()
        .enumerate()
        .map(|(index, bucket)| {
            [
                format!("{}-{}", format(bucket.min()), format(bucket.max())),
                format!("{}%", significant(histogram.percent(index))),
                bar(histogram.scale(scale, index)),
                bucket.count().to_string(),
            ]
        })
        .collect();

    let mut widths = [0_usize; 3];
    for row in &rows {
        for (width, column) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(column.chars().count());
        }
    }

    for [label, percent, glyphs, count] in &rows {
        writeln!(
            w,
            "{}  {}  {}  {}",
            pad(label, widths[0]),
            pad(percent, widths[1]),
            pad(glyphs, widths[2]),
            count
        )?;
    }

    Ok(())
}

/// Renders the histogram into a `String`.
pub fn to_string<S: Scale + ?Sized>(histogram: &Histogram, scale: &S) -> String {
    let mut buf = Vec::new();
    write(&mut buf, histogram, scale).expect("writing to a Vec can't fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// The number of decimals needed to resolve a tenth of the narrowest bucket.
pub fn decimals(histogram: &Histogram) -> usize {
    let width = histogram
        .iter()
        .map(|bucket| bucket.width())
        .filter(|width| width.is_finite() && *width > 0.0)
        .fold(f64::INFINITY, f64::min);

    if !width.is_finite() {
        return 0;
    }

    // the small offset keeps rounding noise in the width from adding a digit
    (-(width / 10.0).log10() - 1e-9).ceil().clamp(0.0, MAX_DECIMALS) as usize
}

/// Formats a value with at most `decimals` decimals, dropping trailing zeros.
pub fn fixed(value: f64, decimals: usize) -> String {
    trim(format!("{value:.decimals$}"))
}

/// Formats a value with three significant digits, dropping trailing zeros.
pub fn significant(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (2 - magnitude).max(0) as usize;
    trim(format!("{value:.decimals$}"))
}

/// Formats a value in nanoseconds as a duration, eg: `250ms` or `1.5s`.
pub fn duration(value: f64) -> String {
    if value < 0.0 {
        format!("-{:?}", Duration::from_nanos(-value as u64))
    } else {
        format!("{:?}", Duration::from_nanos(value as u64))
    }
}

// a run of full blocks followed by the remaining eighths, never empty so
// that empty buckets still show up
fn bar(width: f64) -> String {
    let eighths = (width.max(0.0) * 8.0).round() as usize;
    let full = eighths / 8;
    let rest = eighths % 8;

    let mut bar: String = std::iter::repeat(FULL).take(full).collect();
    if rest > 0 {
        bar.push(PARTIAL[rest - 1]);
    } else if full == 0 {
        bar.push(PARTIAL[0]);
    }
    bar
}

fn trim(formatted: String) -> String {
    if !formatted.contains('.') {
        return formatted;
    }
    match formatted.trim_end_matches('0').trim_end_matches('.') {
        "-0" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

fn pad(column: &str, width: usize) -> String {
    let len = column.chars().count();
    format!("{column}{}", " ".repeat(width.saturating_sub(len)))
}
