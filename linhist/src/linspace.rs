use crate::{Bucket, BuildError};

use core::cmp::Ordering;
use log::debug;

/// Equal width partitioning of `[start, stop]` into a number of buckets.
///
/// Every bucket covers `[start + i * scale, start + (i + 1) * scale)` where
/// `scale = (stop - start) / bins`. The upper bound of the last bucket is
/// pinned to `stop` so the histogram span ends exactly where it was asked to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Linspace {
    start: f64,
    stop: f64,
    bins: usize,
    scale: f64,
}

impl Linspace {
    /// Validate the parameters.
    ///
    /// # Constraints
    /// * `bins` must be at least 1
    /// * `start` must be strictly less than `stop`
    /// * `start`, `stop` and the bucket width must be finite
    /// * every bucket must have a non-zero width once rounded, which rules
    ///   out tiny widths far away from zero
    pub fn new(start: f64, stop: f64, bins: usize) -> Result<Self, BuildError> {
        if bins < 1 {
            return Err(BuildError::InvalidBinCount(bins));
        }

        // NaN bounds are rejected here too
        if start.partial_cmp(&stop) != Some(Ordering::Less) {
            return Err(BuildError::InvalidRange { start, stop });
        }

        // infinite bounds, or a span which overflows
        let scale = (stop - start) / bins as f64;
        if !(start.is_finite() && stop.is_finite() && scale.is_finite()) {
            return Err(BuildError::InvalidRange { start, stop });
        }

        let linspace = Self {
            start,
            stop,
            bins,
            scale,
        };

        if (0..bins)
            .any(|i| linspace.index_to_lower_bound(i) >= linspace.index_to_upper_bound(i))
        {
            return Err(BuildError::InvalidRange { start, stop });
        }

        Ok(linspace)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    /// The width of each bucket.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the lower bound of the bucket at `index`.
    pub fn index_to_lower_bound(&self, index: usize) -> f64 {
        self.start + index as f64 * self.scale
    }

    /// Returns the upper bound of the bucket at `index`.
    pub fn index_to_upper_bound(&self, index: usize) -> f64 {
        if index + 1 >= self.bins {
            self.stop
        } else {
            self.start + (index + 1) as f64 * self.scale
        }
    }

    /// Generate the empty buckets.
    pub fn buckets(&self) -> Vec<Bucket> {
        let buckets: Vec<Bucket> = (0..self.bins)
            .map(|i| Bucket::new(self.index_to_lower_bound(i), self.index_to_upper_bound(i)))
            .collect();

        debug!(
            "generated {} buckets over [{}, {}] with width {}",
            self.bins, self.start, self.stop, self.scale
        );

        buckets
    }
}

/// Produces `bins` empty buckets of equal width covering `[start, stop]`.
pub fn linspace(start: f64, stop: f64, bins: usize) -> Result<Vec<Bucket>, BuildError> {
    Linspace::new(start, stop, bins).map(|l| l.buckets())
}
