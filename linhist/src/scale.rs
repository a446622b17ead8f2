/// Scales the count of a bucket relative to the smallest and largest bucket
/// counts of the histogram, typically to get a width for display.
pub trait Scale {
    fn scale(&self, min: u64, max: u64, value: u64) -> f64;
}

impl<F> Scale for F
where
    F: Fn(u64, u64, u64) -> f64,
{
    fn scale(&self, min: u64, max: u64, value: u64) -> f64 {
        self(min, max, value)
    }
}

/// Linearly maps `min..=max` onto `0..=width`. When all the counts are the
/// same the result is 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Linear {
    width: usize,
}

impl Linear {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Scale for Linear {
    fn scale(&self, min: u64, max: u64, value: u64) -> f64 {
        if min == max {
            return 1.0;
        }
        (value as f64 - min as f64) / (max as f64 - min as f64) * self.width as f64
    }
}
