//! Strategies to find the bucket which holds a value.
//!
//! Every strategy follows the same rules: a value belongs to the bucket where
//! `min <= value < max`, except for the last bucket which also holds a value
//! equal to its `max`. Values outside of all buckets, and NaN, belong to no
//! bucket.
//!
//! Callers must ensure that the buckets are sorted and contiguous, as produced
//! by the span strategies.

use crate::Bucket;

use core::cmp::Ordering;

/// Finds the index of the bucket that holds a value, or `None` when no bucket
/// does.
pub trait Bucketer {
    fn bucket(&self, value: f64, buckets: &[Bucket]) -> Option<usize>;
}

impl<F> Bucketer for F
where
    F: Fn(f64, &[Bucket]) -> Option<usize>,
{
    fn bucket(&self, value: f64, buckets: &[Bucket]) -> Option<usize> {
        self(value, buckets)
    }
}

/// The default strategy, a binary search in `O(log n)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct BinarySearch;

pub type DefaultBucketer = BinarySearch;

impl Bucketer for BinarySearch {
    /// # Panics
    /// Panics if a bucket can't be ordered against the value, which means the
    /// buckets are malformed (a NaN bound).
    fn bucket(&self, value: f64, buckets: &[Bucket]) -> Option<usize> {
        if value.is_nan() {
            return None;
        }

        let last = buckets.last()?;

        buckets
            .binary_search_by(|bucket| {
                // found if the value falls in the bucket or on the upper edge
                // of the final bucket
                if bucket.contains(value, core::ptr::eq(bucket, last)) {
                    return Ordering::Equal;
                }
                if bucket.max <= value {
                    return Ordering::Less;
                }
                if bucket.min > value {
                    return Ordering::Greater;
                }
                panic!("unexpected value fallthrough: (value: {value}, buckets: {buckets:?})");
            })
            .ok()
    }
}

/// Walks the buckets in order. For a handful of buckets this is as fast as
/// the binary search.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearScan;

impl Bucketer for LinearScan {
    fn bucket(&self, value: f64, buckets: &[Bucket]) -> Option<usize> {
        let last = buckets.len().checked_sub(1)?;

        buckets
            .iter()
            .enumerate()
            .find(|(index, bucket)| bucket.contains(value, *index == last))
            .map(|(index, _)| index)
    }
}
