use crate::{Bucket, Bucketer, BuildError, DefaultBucketer, Scale, SpanStrategy};

use log::{debug, trace};

/// A histogram holds the count of samples partitioned over a sorted sequence
/// of contiguous buckets, along with the smallest and largest bucket counts
/// which are used to scale the histogram for display.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Histogram {
    pub(crate) min: u64,
    pub(crate) max: u64,
    pub(crate) count: u64,
    pub(crate) outliers: u64,
    pub(crate) buckets: Vec<Bucket>,
}

impl Histogram {
    /// Count the samples in `data` into `buckets`, using the bucketer to find
    /// the bucket for each value.
    ///
    /// The buckets must be sorted and contiguous and should be empty. Samples
    /// which don't fall into any bucket are still included in the total count
    /// and are reported by `outliers()`.
    ///
    /// With a single bucket every sample is assigned to it without looking at
    /// the values, and the min, max and total count are all the number of
    /// samples.
    pub fn aggregate<B: Bucketer + ?Sized>(
        data: &[f64],
        mut buckets: Vec<Bucket>,
        bucketer: &B,
    ) -> Self {
        let count = data.len() as u64;

        match buckets.len() {
            0 => return Self::default(),
            1 => {
                buckets[0].count = count;
                return Self {
                    min: count,
                    max: count,
                    count,
                    outliers: 0,
                    buckets,
                };
            }
            _ => {}
        }

        let mut min: u64 = 0;
        let mut max: u64 = 0;
        let mut outliers = 0;

        for &value in data {
            let Some(index) = bucketer.bucket(value, &buckets) else {
                trace!("value outside of all buckets: {value}");
                outliers += 1;
                continue;
            };

            let bucket = &mut buckets[index];
            bucket.count += 1;

            min = min.min(bucket.count);
            max = max.max(bucket.count);
        }

        debug!(
            "aggregated {count} values into {} buckets ({outliers} outside)",
            buckets.len()
        );

        Self {
            min,
            max,
            count,
            outliers,
            buckets,
        }
    }

    /// Build the buckets with the span strategy and count the samples using
    /// the default bucketer.
    pub fn from_span<S: SpanStrategy + ?Sized>(
        data: &[f64],
        span: &S,
    ) -> Result<Self, BuildError> {
        let buckets = span.buckets(data)?;
        Ok(Self::aggregate(data, buckets, &DefaultBucketer::default()))
    }

    /// The smallest bucket count observed.
    pub fn min(&self) -> u64 {
        self.min
    }

    /// The largest bucket count observed.
    pub fn max(&self) -> u64 {
        self.max
    }

    /// The total number of samples, including those outside of all buckets.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The number of samples which didn't fall into any bucket.
    pub fn outliers(&self) -> u64 {
        self.outliers
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    /// Returns the count of the bucket at `index` scaled by `scale`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn scale<S: Scale + ?Sized>(&self, scale: &S, index: usize) -> f64 {
        scale.scale(self.min, self.max, self.buckets[index].count)
    }

    /// Returns the count of the bucket at `index` as a percentage of the total
    /// count. An empty histogram has 0 percent everywhere.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn percent(&self, index: usize) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.buckets[index].count as f64 / self.count as f64 * 100.0
    }
}

impl<'a> IntoIterator for &'a Histogram {
    type Item = &'a Bucket;
    type IntoIter = std::slice::Iter<'a, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{linspace, BinarySearch, Exact, Fixed, Linear, LinearScan};
    use rand::Rng;

    const DATA: [f64; 20] = [
        0.1, //
        0.2, 0.21, 0.22, 0.22, //
        0.3, //
        0.4, //
        0.5, 0.51, 0.52, 0.53, 0.54, 0.55, 0.56, 0.57, 0.58, //
        0.6, //
        0.8, //
        0.9, //
        1.0,
    ];

    fn check(histogram: &Histogram, expected: &[(f64, f64, u64)]) {
        assert_eq!(histogram.len(), expected.len());
        for (bucket, (min, max, count)) in histogram.iter().zip(expected) {
            assert!((bucket.min() - min).abs() < 1e-5, "{bucket:?}");
            assert!((bucket.max() - max).abs() < 1e-5, "{bucket:?}");
            assert_eq!(bucket.count(), *count, "{bucket:?}");
        }
    }

    #[test]
    fn size() {
        assert_eq!(std::mem::size_of::<Histogram>(), 56);
    }

    #[test]
    // 10 equal bins over [0, 1], all half-open except the last which is
    // closed. this matches `numpy.histogram(data, range=(0, 1), bins=10)`
    fn fixed_bins() {
        let histogram = Histogram::from_span(&DATA, &Fixed::new(0.0, 1.0, 10)).unwrap();

        check(
            &histogram,
            &[
                (0.0, 0.1, 0),
                (0.1, 0.2, 1),
                (0.2, 0.3, 5),
                (0.3, 0.4, 0),
                (0.4, 0.5, 1),
                (0.5, 0.6, 10),
                (0.6, 0.7, 0),
                (0.7, 0.8, 0),
                (0.8, 0.9, 1),
                (0.9, 1.0, 2),
            ],
        );
        assert_eq!(histogram.count(), 20);
        assert_eq!(histogram.outliers(), 0);
        assert_eq!(histogram.min(), 0);
        assert_eq!(histogram.max(), 10);
    }

    #[test]
    fn exact_bins() {
        let histogram = Histogram::from_span(&DATA, &Exact::new(9)).unwrap();

        check(
            &histogram,
            &[
                (0.1, 0.2, 1),
                (0.2, 0.3, 5),
                (0.3, 0.4, 0),
                (0.4, 0.5, 1),
                (0.5, 0.6, 9),
                (0.6, 0.7, 1),
                (0.7, 0.8, 0),
                (0.8, 0.9, 1),
                (0.9, 1.0, 2),
            ],
        );
        assert_eq!(histogram.count(), 20);
        assert_eq!(histogram.max(), 9);
    }

    #[test]
    fn exact_bins_durations() {
        let millis: [u64; 22] = [
            100, 200, 210, 220, 221, 222, 223, 300, 400, 500, 510, 520, 530, 540, 550, 560, 570,
            580, 600, 800, 900, 1000,
        ];
        let data: Vec<f64> = millis.iter().map(|ms| (ms * 1_000_000) as f64).collect();

        let histogram = Histogram::from_span(&data, &Exact::new(9)).unwrap();

        let expected: Vec<(f64, f64, u64)> = [1, 6, 1, 1, 9, 1, 0, 1, 2]
            .iter()
            .enumerate()
            .map(|(i, count)| {
                (
                    (i as f64 + 1.0) * 1e8,
                    (i as f64 + 2.0) * 1e8,
                    *count,
                )
            })
            .collect();
        check(&histogram, &expected);
        assert_eq!(histogram.count(), 22);
    }

    #[test]
    fn empty() {
        let histogram = Histogram::aggregate(&DATA, Vec::new(), &BinarySearch);
        assert_eq!(histogram, Histogram::default());
        assert!(histogram.is_empty());
        assert_eq!(histogram.count(), 0);
        assert_eq!(histogram.min(), 0);
        assert_eq!(histogram.max(), 0);
    }

    #[test]
    // a single bucket takes all the samples, even those outside its range
    fn single_bucket() {
        let buckets = linspace(100.0, 200.0, 1).unwrap();
        let histogram = Histogram::aggregate(&DATA, buckets, &BinarySearch);

        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.buckets()[0].count(), 20);
        assert_eq!(histogram.count(), 20);
        assert_eq!(histogram.min(), 20);
        assert_eq!(histogram.max(), 20);
        assert_eq!(histogram.outliers(), 0);
    }

    #[test]
    fn no_samples() {
        let buckets = linspace(0.0, 1.0, 4).unwrap();
        let histogram = Histogram::aggregate(&[], buckets, &BinarySearch);

        assert_eq!(histogram.len(), 4);
        assert_eq!(histogram.count(), 0);
        assert!(histogram.iter().all(|b| b.count() == 0));
        assert_eq!(histogram.percent(0), 0.0);
    }

    #[test]
    fn outliers() {
        let data = [-1.0, 0.0, 0.5, 1.0, 1.5, f64::NAN];
        let buckets = linspace(0.0, 1.0, 2).unwrap();
        let histogram = Histogram::aggregate(&data, buckets, &BinarySearch);

        assert_eq!(histogram.count(), 6);
        assert_eq!(histogram.outliers(), 3);
        assert_eq!(histogram.buckets()[0].count(), 1);
        assert_eq!(histogram.buckets()[1].count(), 2);
        assert_eq!(histogram.min(), 0);
        assert_eq!(histogram.max(), 2);
    }

    #[test]
    // bucket counts and outliers always add up to the number of samples
    fn totals() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let data: Vec<f64> = (0..rng.gen_range(0..1000))
                .map(|_| rng.gen_range(-10.0..10.0))
                .collect();
            let bins = rng.gen_range(2..64);
            let buckets = linspace(-5.0, 5.0, bins).unwrap();

            let histogram = Histogram::aggregate(&data, buckets.clone(), &BinarySearch);
            let total: u64 = histogram.iter().map(|b| b.count()).sum();
            assert_eq!(total + histogram.outliers(), data.len() as u64);
            assert_eq!(histogram.count(), data.len() as u64);
            assert_eq!(histogram.max(), histogram.iter().map(|b| b.count()).max().unwrap());

            // the strategies agree
            assert_eq!(Histogram::aggregate(&data, buckets, &LinearScan), histogram);
        }
    }

    #[test]
    fn scale() {
        let histogram = Histogram::from_span(&DATA, &Fixed::new(0.0, 1.0, 10)).unwrap();
        let linear = Linear::new(5);

        assert_eq!(histogram.scale(&linear, 0), 0.0);
        assert_eq!(histogram.scale(&linear, 5), 5.0);
        assert_eq!(histogram.scale(&linear, 2), 2.5);
        assert_eq!(histogram.percent(5), 50.0);
        assert_eq!(histogram.percent(9), 10.0);
    }

    #[test]
    fn errors() {
        assert_eq!(
            Histogram::from_span(&DATA, &Fixed::new(0.0, 1.0, 0)),
            Err(BuildError::InvalidBinCount(0))
        );
        assert!(matches!(
            Histogram::from_span(&[1.0, 1.0], &Exact::new(3)),
            Err(BuildError::InvalidRange { .. })
        ));
        assert!(matches!(
            Histogram::from_span(&[0.0, 1.0, f64::INFINITY], &Exact::new(3)),
            Err(BuildError::InvalidRange { .. })
        ));
        assert!(matches!(
            Histogram::from_span(&DATA, &Fixed::new(-f64::MAX, f64::MAX, 4)),
            Err(BuildError::InvalidRange { .. })
        ));
    }
}
