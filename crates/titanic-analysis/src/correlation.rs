use serde::Serialize;
use titanic_data::Passenger;
use titanic_stats::correlation::correlation_matrix;

use crate::encoder::LabelEncoder;

/// Category used for a missing sex or port before label encoding.
pub const MISSING_CATEGORY: &str = "nan";

/// Feature names, in matrix order.
pub const FEATURES: [&str; 6] = ["Survived", "Pclass", "Sex", "Age", "Fare", "Embarked"];

/// Pairwise Pearson correlation between the encoded features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<&'static str>,
    /// `values[i][j]` is the coefficient between `labels[i]` and `labels[j]`;
    /// `None` when undefined.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Encodes sex and port, then correlates the six features using
    /// pairwise-complete observations.
    #[must_use]
    pub fn from_passengers(passengers: &[Passenger]) -> Self {
        let sex = encode_column(passengers.iter().map(|p| p.sex.as_deref()));
        let port = encode_column(passengers.iter().map(|p| p.embarked.as_deref()));

        let columns = [
            passengers
                .iter()
                .map(Passenger::survived_indicator)
                .collect(),
            passengers
                .iter()
                .map(|p| Some(f64::from(p.class.number())))
                .collect(),
            sex,
            passengers.iter().map(|p| p.age).collect(),
            passengers.iter().map(|p| p.fare).collect(),
            port,
        ];

        Self {
            labels: FEATURES.to_vec(),
            values: correlation_matrix(&columns),
        }
    }

    /// Looks up the coefficient between two named features.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| *l == a)?;
        let j = self.labels.iter().position(|l| *l == b)?;
        self.values[i][j]
    }
}

/// Formats a coefficient with two decimals, or `nan` when undefined.
#[must_use]
pub fn format_coefficient(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_CATEGORY.to_owned(), |v| format!("{v:.2}"))
}

#[expect(clippy::cast_precision_loss)]
fn encode_column<'a, I>(values: I) -> Vec<Option<f64>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let values = values
        .into_iter()
        .map(|v| v.unwrap_or(MISSING_CATEGORY))
        .collect::<Vec<_>>();
    let encoder = LabelEncoder::fit(&values);
    values
        .iter()
        .map(|v| encoder.transform(v).ok().map(|code| code as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, passenger};

    #[test]
    fn test_matrix_shape_and_symmetry() {
        let train = fixtures::sample_train();
        let matrix = CorrelationMatrix::from_passengers(&train);
        assert_eq!(matrix.labels, FEATURES);
        assert_eq!(matrix.values.len(), 6);
        for i in 0..6 {
            assert_eq!(matrix.values[i][i], Some(1.0));
            for j in 0..6 {
                assert_eq!(matrix.values[i][j], matrix.values[j][i]);
                if let Some(r) = matrix.values[i][j] {
                    assert!((-1.0..=1.0).contains(&r));
                }
            }
        }
    }

    #[test]
    fn test_sex_correlates_negatively_with_survival() {
        let train = fixtures::sample_train();
        let matrix = CorrelationMatrix::from_passengers(&train);
        // female = 0, male = 1
        assert!(matrix.get("Survived", "Sex").unwrap() < 0.0);
        assert!(matrix.get("Survived", "Pclass").unwrap() < 0.0);
        assert_eq!(matrix.get("Survived", "Unknown"), None);
    }

    #[test]
    fn test_missing_port_is_encoded_as_last_category() {
        let column = encode_column([Some("S"), None, Some("C"), Some("Q")]);
        assert_eq!(column, [Some(2.0), Some(3.0), Some(0.0), Some(1.0)]);
    }

    #[test]
    fn test_constant_column_is_undefined() {
        let train = vec![
            passenger(1, true, 1, Some("female"), Some(30.0), Some(10.0), Some("S")),
            passenger(2, false, 1, Some("female"), Some(40.0), Some(20.0), Some("S")),
            passenger(3, true, 1, Some("female"), Some(50.0), Some(30.0), Some("S")),
        ];
        let matrix = CorrelationMatrix::from_passengers(&train);
        assert_eq!(matrix.get("Survived", "Pclass"), None);
        assert_eq!(matrix.get("Pclass", "Pclass"), None);
        assert_eq!(format_coefficient(matrix.get("Survived", "Sex")), "nan");
        assert_eq!(format_coefficient(matrix.get("Age", "Fare")), "1.00");
    }
}
