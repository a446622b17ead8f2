//! Span strategies decide the range a histogram covers before any samples are
//! counted.
//!
//! * `Fixed` - the same configured range for every dataset, which keeps
//!   histograms of different datasets comparable
//! * `Exact` - the range runs from the smallest to the largest sample

use crate::{linspace, Bucket, BuildError};

/// Derives the empty, sorted buckets for a histogram of `data`.
pub trait SpanStrategy {
    fn buckets(&self, data: &[f64]) -> Result<Vec<Bucket>, BuildError>;
}

/// Always bins into `[start, stop]` with `bins` buckets, regardless of the
/// data.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fixed {
    start: f64,
    stop: f64,
    bins: usize,
}

impl Fixed {
    pub fn new(start: f64, stop: f64, bins: usize) -> Self {
        Self { start, stop, bins }
    }
}

impl SpanStrategy for Fixed {
    fn buckets(&self, _data: &[f64]) -> Result<Vec<Bucket>, BuildError> {
        linspace(self.start, self.stop, self.bins)
    }
}

/// Bins into `[min(data), max(data)]` with `bins` buckets.
///
/// The data must not be empty. For an empty slice the computed range is
/// inverted and the buckets can't be generated, so `BuildError::InvalidRange`
/// is returned. The same error is returned when all values are equal or when
/// a value is infinite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Exact {
    bins: usize,
}

impl Exact {
    pub fn new(bins: usize) -> Self {
        Self { bins }
    }
}

impl SpanStrategy for Exact {
    fn buckets(&self, data: &[f64]) -> Result<Vec<Bucket>, BuildError> {
        let start = data.iter().copied().fold(f64::INFINITY, f64::min);
        let stop = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        linspace(start, stop, self.bins)
    }
}

/// Serializable form of the span strategies, for use in configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "span", rename_all = "lowercase"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Span {
    Fixed { start: f64, stop: f64, bins: usize },
    Exact { bins: usize },
}

impl Span {
    pub fn bins(&self) -> usize {
        match self {
            Self::Fixed { bins, .. } | Self::Exact { bins } => *bins,
        }
    }
}

impl SpanStrategy for Span {
    fn buckets(&self, data: &[f64]) -> Result<Vec<Bucket>, BuildError> {
        match *self {
            Self::Fixed { start, stop, bins } => Fixed::new(start, stop, bins).buckets(data),
            Self::Exact { bins } => Exact::new(bins).buckets(data),
        }
    }
}

impl From<Fixed> for Span {
    fn from(other: Fixed) -> Self {
        Self::Fixed {
            start: other.start,
            stop: other.stop,
            bins: other.bins,
        }
    }
}

impl From<Exact> for Span {
    fn from(other: Exact) -> Self {
        Self::Exact { bins: other.bins }
    }
}
