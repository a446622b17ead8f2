//! Buckets represent a contiguous range of values and a count of the samples
//! that fall into that range.

/// A bucket covers the half-open range `[min, max)` and counts the samples
/// that were assigned to it. The last bucket of a histogram also includes its
/// upper bound.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Bucket {
    pub(crate) count: u64,
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl Bucket {
    pub(crate) fn new(min: f64, max: f64) -> Self {
        Self { count: 0, min, max }
    }

    /// Returns the number of samples within the bucket's range.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the inclusive lower bound for the bucket.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the exclusive upper bound for the bucket.
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns the range for the bucket.
    pub fn range(&self) -> std::ops::Range<f64> {
        self.min..self.max
    }

    /// Whether the value falls into this bucket. When `is_last` is set the
    /// upper bound is treated as inclusive.
    pub fn contains(&self, value: f64, is_last: bool) -> bool {
        (self.min <= value && value < self.max) || (is_last && value == self.max)
    }
}
