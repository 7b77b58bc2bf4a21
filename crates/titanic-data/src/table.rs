//! Column-oriented display view over the loaded tables.
//!
//! Panels and reports render tables generically; [`TableView`] flattens any
//! of the three record types into headers plus typed cells so numeric columns
//! can be styled (e.g. with a colour gradient) independently of text columns.

use std::fmt;

use serde::Serialize;

use crate::{Passenger, SubmissionRecord};

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Returns the numeric value of the cell, if any.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) | Self::Missing => None,
        }
    }

    fn text(value: Option<&str>) -> Self {
        value.map_or(Self::Missing, |s| Self::Text(s.to_owned()))
    }

    fn float(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Float)
    }

    fn integer<T>(value: Option<T>) -> Self
    where
        T: Into<i64>,
    {
        value.map_or(Self::Missing, |v| Self::Integer(v.into()))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.2}"),
            Self::Text(s) => f.write_str(s),
            Self::Missing => f.write_str("NaN"),
        }
    }
}

/// Headers plus rows of typed cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<CellValue>>,
}

const PASSENGER_HEADERS: [&str; 12] = [
    "PassengerId",
    "Survived",
    "Pclass",
    "Name",
    "Sex",
    "Age",
    "SibSp",
    "Parch",
    "Ticket",
    "Fare",
    "Cabin",
    "Embarked",
];

impl TableView {
    /// Builds a view over passenger rows.
    ///
    /// The `Survived` column is included only when `with_outcome` is set,
    /// matching the training/test schemas.
    #[must_use]
    pub fn passengers<'a, I>(passengers: I, with_outcome: bool) -> Self
    where
        I: IntoIterator<Item = &'a Passenger>,
    {
        let headers = PASSENGER_HEADERS
            .into_iter()
            .filter(|h| with_outcome || *h != "Survived")
            .collect();
        let rows = passengers
            .into_iter()
            .map(|p| {
                let mut row = vec![CellValue::Integer(p.passenger_id.into())];
                if with_outcome {
                    row.push(CellValue::integer(p.survived.map(u8::from)));
                }
                row.extend([
                    CellValue::Integer(p.class.number().into()),
                    CellValue::text(p.name.as_deref()),
                    CellValue::text(p.sex.as_deref()),
                    CellValue::float(p.age),
                    CellValue::integer(p.sib_sp),
                    CellValue::integer(p.parch),
                    CellValue::text(p.ticket.as_deref()),
                    CellValue::float(p.fare),
                    CellValue::text(p.cabin.as_deref()),
                    CellValue::text(p.embarked.as_deref()),
                ]);
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Builds a view over example-submission rows.
    #[must_use]
    pub fn submission<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SubmissionRecord>,
    {
        Self {
            headers: vec!["PassengerId", "Survived"],
            rows: records
                .into_iter()
                .map(|r| {
                    vec![
                        CellValue::Integer(r.passenger_id.into()),
                        CellValue::Integer(u8::from(r.survived).into()),
                    ]
                })
                .collect(),
        }
    }

    /// Returns the `(min, max)` of the numeric cells in a column.
    #[must_use]
    pub fn column_range(&self, column: usize) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column)?.as_number())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
    }
}
