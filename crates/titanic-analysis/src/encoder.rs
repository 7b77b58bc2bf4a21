use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EncodingError {
    /// The value was not among the categories seen at fit time.
    #[display("unknown category {value:?} (known: {})", known.join(", "))]
    UnknownCategory { value: String, known: Vec<String> },
}

/// Maps string categories to integer codes.
///
/// Codes are assigned in sorted order of the distinct values seen at fit time,
/// so `["male", "female", "male"]` encodes `female` as 0 and `male` as 1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    #[must_use]
    pub fn fit<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes = values
            .into_iter()
            .map(|v| v.as_ref().to_owned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self { classes }
    }

    /// Known categories, in code order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn transform(&self, value: &str) -> Result<usize, EncodingError> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(value))
            .map_err(|_| EncodingError::UnknownCategory {
                value: value.to_owned(),
                known: self.classes.clone(),
            })
    }

    /// Returns the category for `code`, if in range.
    #[must_use]
    pub fn inverse(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }
}
