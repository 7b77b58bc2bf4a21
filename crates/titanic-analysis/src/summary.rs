use serde::Serialize;
use titanic_data::Passenger;

/// Aggregate counts shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurvivalSummary {
    /// Number of passengers with a known outcome.
    pub passengers: usize,
    pub survivors: usize,
    /// Mean of the survival indicator; `None` for an empty table.
    pub rate: Option<f64>,
}

impl SurvivalSummary {
    /// Summarizes the passengers with a known outcome.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_passengers(passengers: &[Passenger]) -> Self {
        let (total, survivors) = passengers
            .iter()
            .filter_map(|p| p.survived)
            .fold((0, 0), |(total, survivors), s| {
                (total + 1, survivors + usize::from(s))
            });
        Self {
            passengers: total,
            survivors,
            rate: (total > 0).then(|| survivors as f64 / total as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures, format_percent};

    #[test]
    fn test_empty_table_has_no_rate() {
        let summary = SurvivalSummary::from_passengers(&[]);
        assert_eq!(summary.passengers, 0);
        assert_eq!(summary.rate, None);
    }

    #[test]
    fn test_counts_and_rate() {
        let train = fixtures::sample_train();
        let summary = SurvivalSummary::from_passengers(&train);
        assert_eq!(summary.passengers, 31);
        assert_eq!(summary.survivors, 16);
        let rate = summary.rate.unwrap();
        assert!((0.0..=1.0).contains(&rate));
    }

    #[test]
    fn test_displayed_rate_matches_ratio() {
        let train = fixtures::sample_train();
        let summary = SurvivalSummary::from_passengers(&train);
        #[expect(clippy::cast_precision_loss)]
        let ratio = summary.survivors as f64 / summary.passengers as f64;
        assert_eq!(format_percent(summary.rate.unwrap()), format_percent(ratio));
        assert_eq!(format_percent(summary.rate.unwrap()), "51.61%");
    }

    #[test]
    fn test_rows_without_outcome_are_ignored() {
        let mut train = fixtures::sample_train();
        train[0].survived = None;
        let summary = SurvivalSummary::from_passengers(&train);
        assert_eq!(summary.passengers, 30);
    }
}
