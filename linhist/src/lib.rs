//! This crate counts floating point samples into equal width buckets and
//! renders the result as a text bar chart.
//!
//! Building a histogram happens in three steps:
//!
//! * a span strategy decides the range and produces the empty buckets, either
//!   a `Fixed` range or an `Exact` range which covers the data
//! * a `Bucketer` finds the bucket for each sample, `BinarySearch` by default
//! * `Histogram::aggregate` counts the samples and tracks the smallest and
//!   largest bucket counts
//!
//! Buckets are half-open `[min, max)` intervals, except the last one which
//! also includes its upper bound. This is the same convention as
//! `numpy.histogram`.
//!
//! ```
//! use linhist::{render, Exact, Histogram, Linear};
//!
//! let data = [0.1, 0.2, 0.25, 0.5, 0.9, 1.0];
//! let histogram = Histogram::from_span(&data, &Exact::new(3)).unwrap();
//!
//! let counts: Vec<u64> = histogram.iter().map(|b| b.count()).collect();
//! assert_eq!(counts, vec![3, 1, 2]);
//!
//! print!("{}", render::to_string(&histogram, &Linear::new(20)));
//! ```

pub mod render;

mod bucket;
mod bucketer;
mod errors;
mod linspace;
mod scale;
mod span;
mod standard;

pub use bucket::Bucket;
pub use bucketer::{BinarySearch, Bucketer, DefaultBucketer, LinearScan};
pub use errors::BuildError;
pub use linspace::{linspace, Linspace};
pub use scale::{Linear, Scale};
pub use span::{Exact, Fixed, Span, SpanStrategy};
pub use standard::Histogram;
