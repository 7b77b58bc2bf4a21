use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides the data range `[min, max]` into equal-width bins
/// and counts the frequency of values falling into each bin. Every bin is
/// half-open except the last, which also includes `max`, so the bin counts
/// always sum to the number of input values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    ///
    /// The last bin of a histogram additionally contains its `end`.
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl HistogramBin {
    /// Returns the center of this bin.
    #[must_use]
    pub fn center(&self) -> f64 {
        f64::midpoint(self.range.start, self.range.end)
    }
}

impl Histogram {
    /// Creates an equal-width histogram spanning the data range.
    ///
    /// When every value is identical the range is widened to `value ± 0.5`
    /// so that the bins have a non-zero width.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to create the histogram from. Non-finite values are skipped.
    /// * `num_bins` - The number of bins to create.
    ///
    /// # Examples
    ///
    /// ```
    /// # use titanic_stats::histogram::Histogram;
    /// let histogram = Histogram::uniform([0.0, 1.0, 2.0, 3.0, 4.0], 2);
    /// assert_eq!(histogram.bins[0].count, 2);
    /// assert_eq!(histogram.bins[1].count, 3);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn uniform<I>(values: I, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        if values.is_empty() || num_bins == 0 {
            return Self { bins: vec![] };
        }

        let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max - min < f64::EPSILON {
            min -= 0.5;
            max += 0.5;
        }
        let width = (max - min) / num_bins as f64;

        // Recompute each edge from `min` to avoid floating-point accumulation
        let edge = |idx: usize| {
            if idx == num_bins {
                max
            } else {
                min + width * idx as f64
            }
        };
        let mut bins = (0..num_bins)
            .map(|idx| HistogramBin {
                range: edge(idx)..edge(idx + 1),
                count: 0,
            })
            .collect::<Vec<_>>();

        for val in values {
            let idx = (((val - min) / width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Returns the width shared by all bins, or `None` for an empty histogram.
    #[must_use]
    pub fn bin_width(&self) -> Option<f64> {
        self.bins.first().map(|bin| bin.range.end - bin.range.start)
    }

    /// Returns the sum of all bin counts.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Returns the largest bin count, or zero for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let histogram = Histogram::uniform(Vec::<f64>::new(), 20);
        assert!(histogram.bins.is_empty());
        assert_eq!(histogram.bin_width(), None);
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let histogram = Histogram::uniform([0.42, 40.0, 80.0], 20);
        assert_eq!(histogram.bins.len(), 20);
        assert_eq!(histogram.bins[19].count, 1);
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[19].range.end, 80.0);
    }

    #[test]
    fn test_counts_sum_to_input_length() {
        let values = (0..891).map(|i| f64::from(i % 80) + 0.5).collect::<Vec<_>>();
        let histogram = Histogram::uniform(values.iter().copied(), 20);
        assert_eq!(histogram.total_count(), 891);
    }

    #[test]
    fn test_bins_are_contiguous_and_equal_width() {
        let histogram = Histogram::uniform([1.0, 3.0, 9.0, 11.0], 5);
        let width = histogram.bin_width().unwrap();
        assert!((width - 2.0).abs() < 1e-12);
        for pair in histogram.bins.windows(2) {
            assert!((pair[0].range.end - pair[1].range.start).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_distinct_value() {
        let histogram = Histogram::uniform([5.0, 5.0, 5.0], 4);
        assert_eq!(histogram.total_count(), 3);
        assert_eq!(histogram.bins.first().unwrap().range.start, 4.5);
        assert_eq!(histogram.bins.last().unwrap().range.end, 5.5);
    }

    #[test]
    fn test_non_finite_values_are_skipped() {
        let histogram = Histogram::uniform([1.0, f64::NAN, 2.0, f64::INFINITY], 2);
        assert_eq!(histogram.total_count(), 2);
    }
}
