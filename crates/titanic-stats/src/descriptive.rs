/// Descriptive statistics summarizing a dataset.
///
/// This structure holds the central tendency and spread of a dataset of
/// `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset (mean of the two middle values for even counts).
    pub median: f64,
    /// The sample standard deviation (Bessel-corrected, `n - 1` denominator).
    ///
    /// Zero when the dataset has a single value.
    pub sample_std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use titanic_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        if sorted_values.is_empty() {
            return None;
        }

        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = if count % 2 == 1 {
            sorted_values[count / 2]
        } else {
            f64::midpoint(sorted_values[count / 2 - 1], sorted_values[count / 2])
        };
        let sample_std_dev = if count > 1 {
            let sum_sq = sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Some(Self {
            mean,
            median,
            sample_std_dev,
        })
    }
}

/// Returns the arithmetic mean of the values, or `None` when empty.
///
/// ```
/// # use titanic_stats::descriptive::mean;
/// assert_eq!(mean([1.0, 0.0, 1.0, 0.0]), Some(0.5));
/// assert_eq!(mean(std::iter::empty()), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_none() {
        assert!(DescriptiveStats::new(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_even_count_median_is_midpoint() {
        let stats = DescriptiveStats::new([4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.mean, 2.5);
    }

    #[test]
    fn test_sample_std_dev_uses_bessel_correction() {
        let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((stats.sample_std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([29.7]).unwrap();
        assert_eq!(stats.median, 29.7);
        assert_eq!(stats.sample_std_dev, 0.0);
    }
}
