use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use linhist::{render, Exact, Fixed, Histogram, Linear, Span};
use log::{debug, info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Prints a histogram of the numbers read from FILE, or stdin when no FILE is
/// given. Numbers are separated by whitespace.
#[derive(Parser, Debug)]
#[command(name = "linhist", version, about)]
struct Cli {
    /// Input file, defaults to stdin
    file: Option<PathBuf>,

    /// Number of buckets
    #[arg(short, long, default_value_t = 10)]
    bins: usize,

    /// Lower bound of the histogram, requires --stop
    #[arg(long, requires = "stop", allow_negative_numbers = true)]
    start: Option<f64>,

    /// Upper bound of the histogram, requires --start
    #[arg(long, requires = "start", allow_negative_numbers = true)]
    stop: Option<f64>,

    /// Width of the longest bar, in characters
    #[arg(short, long, default_value_t = 40)]
    width: usize,

    /// Label buckets as durations, treating values as nanoseconds
    #[arg(short, long)]
    duration: bool,

    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn span(&self) -> Span {
        match (self.start, self.stop) {
            (Some(start), Some(stop)) => Fixed::new(start, stop, self.bins).into(),
            _ => Exact::new(self.bins).into(),
        }
    }
}

fn parse(input: &str) -> Result<Vec<f64>> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("not a number: {token}"))
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialize logging")?;

    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let data = parse(&input)?;
    if data.is_empty() {
        warn!("no values to count");
        return Ok(());
    }
    info!("read {} values", data.len());

    let span = cli.span();
    debug!("using {span:?}");

    let histogram = Histogram::from_span(&data, &span)?;
    if histogram.outliers() > 0 {
        warn!("{} values outside of the histogram range", histogram.outliers());
    }

    let scale = Linear::new(cli.width);
    let mut stdout = io::stdout().lock();
    if cli.duration {
        render::write_with(&mut stdout, &histogram, &scale, render::duration)?;
    } else {
        render::write(&mut stdout, &histogram, &scale)?;
    }
    stdout.flush()?;

    Ok(())
}
