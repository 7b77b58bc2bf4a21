//! Gaussian kernel density estimation.
//!
//! The bandwidth follows Scott's rule, `h = σ · n^(-1/5)`, where `σ` is the
//! Bessel-corrected sample standard deviation.

use std::f64::consts::PI;

use crate::descriptive::DescriptiveStats;

/// A Gaussian kernel density estimate fit to a one-dimensional sample.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fits a KDE to the given values.
    ///
    /// Returns `None` when fewer than two finite values are given or when
    /// the sample has zero variance (the density would be degenerate).
    ///
    /// ```
    /// # use titanic_stats::kde::GaussianKde;
    /// let kde = GaussianKde::new([1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert!(kde.density(2.5) > kde.density(10.0));
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let samples = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        if samples.len() < 2 {
            return None;
        }
        let stats = DescriptiveStats::new(samples.iter().copied())?;
        if stats.sample_std_dev <= 0.0 {
            return None;
        }
        let bandwidth = stats.sample_std_dev * (samples.len() as f64).powf(-0.2);
        Some(Self { samples, bandwidth })
    }

    /// Returns the kernel bandwidth.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Evaluates the probability density at `x`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn density(&self, x: f64) -> f64 {
        let norm = 1.0 / ((2.0 * PI).sqrt() * self.bandwidth * self.samples.len() as f64);
        self.samples
            .iter()
            .map(|s| {
                let z = (x - s) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>()
            * norm
    }

    /// Evaluates the density at `points` evenly spaced positions over `[start, end]`.
    ///
    /// Returns `(x, density)` pairs. Fewer than two points yields `start` only.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn evaluate_grid(&self, start: f64, end: f64, points: usize) -> Vec<(f64, f64)> {
        if points < 2 {
            return vec![(start, self.density(start))];
        }
        let step = (end - start) / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = start + step * i as f64;
                (x, self.density(x))
            })
            .collect()
    }
}
