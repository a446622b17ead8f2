use thiserror::Error;

/// Errors returned when generating the buckets for a histogram.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BuildError {
    /// At least one bucket is required.
    #[error("bad value for number of bins: {0}")]
    InvalidBinCount(usize),
    /// The start of the range must be strictly less than the stop.
    #[error("bad value for start/stop: ({start}, {stop})")]
    InvalidRange { start: f64, stop: f64 },
}
