//! Survival rate grouped by a categorical key.
//!
//! Rows whose key is missing are excluded from the groups (never imputed)
//! and counted in [`SurvivalBreakdown::excluded`].

use std::collections::BTreeMap;

use serde::Serialize;
use titanic_data::{CabinClass, Passenger, Port};
use titanic_stats::descriptive;

/// Survival statistics for a single group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRate<K> {
    pub key: K,
    pub passengers: usize,
    pub survivors: usize,
    /// Mean of the survival indicator within the group, always in `[0, 1]`.
    pub rate: f64,
}

/// Survival rate per group plus the overall reference rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivalBreakdown<K> {
    pub groups: Vec<GroupRate<K>>,
    /// Rows excluded because the grouping key was missing.
    pub excluded: usize,
    /// Survival rate over every row with a known outcome, including excluded rows.
    pub overall_rate: Option<f64>,
}

impl<K> SurvivalBreakdown<K> {
    /// Total number of rows that were assigned to a group.
    #[must_use]
    pub fn grouped_count(&self) -> usize {
        self.groups.iter().map(|g| g.passengers).sum()
    }
}

/// Groups passengers by `key` and computes the survival rate of each group.
///
/// Groups come out in ascending key order. Passengers without an outcome are skipped.
#[expect(clippy::cast_precision_loss)]
pub fn group_survival<K, F>(passengers: &[Passenger], key: F) -> SurvivalBreakdown<K>
where
    K: Ord,
    F: Fn(&Passenger) -> Option<K>,
{
    let mut map = BTreeMap::<K, (usize, usize)>::new();
    let mut excluded = 0;
    for p in passengers {
        let Some(survived) = p.survived else {
            continue;
        };
        match key(p) {
            Some(k) => {
                let (count, survivors) = map.entry(k).or_default();
                *count += 1;
                *survivors += usize::from(survived);
            }
            None => excluded += 1,
        }
    }

    let groups = map
        .into_iter()
        .map(|(key, (passengers, survivors))| GroupRate {
            key,
            passengers,
            survivors,
            rate: survivors as f64 / passengers as f64,
        })
        .collect();

    SurvivalBreakdown {
        groups,
        excluded,
        overall_rate: descriptive::mean(passengers.iter().filter_map(Passenger::survived_indicator)),
    }
}

/// Survival rate by sex, highest rate first.
#[must_use]
pub fn by_sex(passengers: &[Passenger]) -> SurvivalBreakdown<String> {
    let mut breakdown = group_survival(passengers, |p| p.sex.clone());
    breakdown
        .groups
        .sort_by(|a, b| b.rate.total_cmp(&a.rate).then_with(|| a.key.cmp(&b.key)));
    breakdown
}

/// Survival rate by cabin class, in class order.
#[must_use]
pub fn by_class(passengers: &[Passenger]) -> SurvivalBreakdown<CabinClass> {
    group_survival(passengers, |p| Some(p.class))
}

/// Survival rate by embarkation port, in code order (`C`, `Q`, `S`).
///
/// Rows with no port are counted as excluded. Codes outside the fixed lookup
/// are also excluded and reported with a warning.
#[must_use]
pub fn by_port(passengers: &[Passenger]) -> SurvivalBreakdown<Port> {
    group_survival(passengers, |p| {
        let code = p.embarked.as_deref()?;
        let port = Port::from_code(code);
        if port.is_none() {
            tracing::warn!(
                passenger_id = p.passenger_id,
                code,
                "unrecognized embarkation code excluded"
            );
        }
        port
    })
}
