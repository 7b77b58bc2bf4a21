use titanic_data::Passenger;

/// Result of a name search.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum SearchOutcome<'a> {
    /// The query was empty; nothing was searched.
    Idle,
    NoResults,
    Matches(Vec<&'a Passenger>),
}

impl SearchOutcome<'_> {
    /// Number of matching rows (zero when idle).
    #[must_use]
    pub fn match_count(&self) -> usize {
        match self {
            Self::Matches(rows) => rows.len(),
            Self::Idle | Self::NoResults => 0,
        }
    }
}

/// Case-insensitive substring search over passenger names.
///
/// The query is matched literally; characters such as `.` or `(` carry no
/// special meaning.
#[must_use]
pub fn search_by_name<'a>(passengers: &'a [Passenger], query: &str) -> SearchOutcome<'a> {
    if query.is_empty() {
        return SearchOutcome::Idle;
    }
    let needle = query.to_lowercase();
    let matches = passengers
        .iter()
        .filter(|p| p.name_contains(&needle))
        .collect::<Vec<_>>();
    tracing::debug!(query, matches = matches.len(), "name search");
    if matches.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::passenger;

    fn named(id: u32, name: Option<&str>) -> Passenger {
        let mut p = passenger(id, true, 1, Some("female"), None, None, None);
        p.name = name.map(str::to_owned);
        p
    }

    fn table() -> Vec<Passenger> {
        vec![
            named(1, Some("Smith, Mr. James Clinch")),
            named(2, Some("Braund, Mr. Owen Harris")),
            named(3, Some("SMITHSON, Miss Alice")),
            named(4, None),
            named(5, Some("")),
            named(6, Some("Goldsmith, Mrs. Frank John (Emily Alice Brown)")),
        ]
    }

    #[test]
    fn test_empty_query_is_idle() {
        let rows = table();
        assert!(search_by_name(&rows, "").is_idle());
    }

    #[test]
    fn test_no_results() {
        let rows = table();
        let outcome = search_by_name(&rows, "zzz");
        assert!(outcome.is_no_results());
        assert_eq!(outcome.match_count(), 0);
    }

    #[test]
    fn test_matches_any_case() {
        let rows = table();
        let SearchOutcome::Matches(found) = search_by_name(&rows, "smith") else {
            panic!("expected matches");
        };
        let ids = found.iter().map(|p| p.passenger_id).collect::<Vec<_>>();
        assert_eq!(ids, [1, 3, 6]);

        let upper = search_by_name(&rows, "SMITH");
        assert_eq!(upper.match_count(), 3);
    }

    #[test]
    fn test_query_is_literal() {
        let rows = table();
        assert_eq!(search_by_name(&rows, "(emily").match_count(), 1);
        assert!(search_by_name(&rows, "m.*h").is_no_results());
    }
}
