use serde::Serialize;
use titanic_data::Passenger;
use titanic_stats::{descriptive::DescriptiveStats, histogram::Histogram, kde::GaussianKde};

/// Number of equal-width age bins.
pub const AGE_BINS: usize = 20;

/// Number of points the density curve is evaluated at.
pub const DENSITY_POINTS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeBin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

/// Age histogram with a density overlay scaled to bin counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeDistribution {
    pub bins: Vec<AgeBin>,
    /// `(age, expected count per bin)` pairs; empty when the density is degenerate.
    pub density: Vec<(f64, f64)>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Rows excluded because the age was missing.
    pub excluded: usize,
}

impl AgeDistribution {
    /// Buckets the known ages into [`AGE_BINS`] bins spanning `[min, max]`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_passengers(passengers: &[Passenger]) -> Self {
        let ages = passengers.iter().filter_map(|p| p.age).collect::<Vec<_>>();
        let excluded = passengers.len() - ages.len();
        let stats = DescriptiveStats::new(ages.iter().copied());
        let histogram = Histogram::uniform(ages.iter().copied(), AGE_BINS);

        let density = match (GaussianKde::new(ages.iter().copied()), histogram.bin_width()) {
            (Some(kde), Some(width)) => {
                let start = histogram.bins.first().map_or(0.0, |b| b.range.start);
                let end = histogram.bins.last().map_or(0.0, |b| b.range.end);
                let scale = ages.len() as f64 * width;
                kde.evaluate_grid(start, end, DENSITY_POINTS)
                    .into_iter()
                    .map(|(x, d)| (x, d * scale))
                    .collect()
            }
            _ => vec![],
        };

        if excluded > 0 {
            tracing::debug!(excluded, "rows without age left out of distribution");
        }

        Self {
            bins: histogram
                .bins
                .into_iter()
                .map(|bin| AgeBin {
                    start: bin.range.start,
                    end: bin.range.end,
                    count: bin.count,
                })
                .collect(),
            density,
            mean: stats.as_ref().map(|s| s.mean),
            median: stats.map(|s| s.median),
            excluded,
        }
    }

    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
