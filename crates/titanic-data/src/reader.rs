//! CSV row parsing for the passenger and submission tables.

use std::io;

use serde::Deserialize;

use crate::{CabinClass, DataError, Passenger, SubmissionRecord};

/// Raw CSV shape shared by the training and test tables.
///
/// The test table has no `Survived` column; it deserializes as `None`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PassengerRow {
    passenger_id: u32,
    #[serde(default)]
    survived: Option<u8>,
    pclass: u8,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    sex: Option<String>,
    #[serde(default)]
    age: Option<f64>,
    #[serde(default)]
    sib_sp: Option<u32>,
    #[serde(default)]
    parch: Option<u32>,
    #[serde(default)]
    ticket: Option<String>,
    #[serde(default)]
    fare: Option<f64>,
    #[serde(default)]
    cabin: Option<String>,
    #[serde(default)]
    embarked: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SubmissionRow {
    passenger_id: u32,
    survived: u8,
}

fn parse_flag(table: &str, line: u64, value: u8) -> Result<bool, DataError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(DataError::InvalidRecord {
            table: table.to_owned(),
            line,
            reason: format!("Survived must be 0 or 1 (got {value})"),
        }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Iterates over deserialized rows together with their 1-based line numbers.
fn read_rows<R, T>(table: &str, reader: R) -> Result<Vec<(u64, T)>, DataError>
where
    R: io::Read,
    T: serde::de::DeserializeOwned,
{
    let csv_error = |source| DataError::Csv {
        table: table.to_owned(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();

    reader
        .records()
        .map(|record| {
            let record = record.map_err(csv_error)?;
            let line = record.position().map_or(0, csv::Position::line);
            let row = record.deserialize(Some(&headers)).map_err(csv_error)?;
            Ok((line, row))
        })
        .collect()
}

fn passenger(table: &str, line: u64, row: PassengerRow) -> Result<Passenger, DataError> {
    let class = CabinClass::try_from(row.pclass).map_err(|reason| DataError::InvalidRecord {
        table: table.to_owned(),
        line,
        reason,
    })?;
    let survived = row
        .survived
        .map(|value| parse_flag(table, line, value))
        .transpose()?;
    Ok(Passenger {
        passenger_id: row.passenger_id,
        survived,
        class,
        name: non_empty(row.name),
        sex: non_empty(row.sex),
        age: row.age,
        sib_sp: row.sib_sp,
        parch: row.parch,
        ticket: non_empty(row.ticket),
        fare: row.fare,
        cabin: non_empty(row.cabin),
        embarked: non_empty(row.embarked),
    })
}

/// Reads a passenger table (training or test).
pub(crate) fn read_passengers<R>(table: &str, reader: R) -> Result<Vec<Passenger>, DataError>
where
    R: io::Read,
{
    read_rows::<_, PassengerRow>(table, reader)?
        .into_iter()
        .map(|(line, row)| passenger(table, line, row))
        .collect()
}

/// Reads the training table, requiring an outcome on every row.
pub(crate) fn read_training<R>(table: &str, reader: R) -> Result<Vec<Passenger>, DataError>
where
    R: io::Read,
{
    read_rows::<_, PassengerRow>(table, reader)?
        .into_iter()
        .map(|(line, row)| {
            if row.survived.is_none() {
                return Err(DataError::MissingOutcome {
                    table: table.to_owned(),
                    line,
                });
            }
            passenger(table, line, row)
        })
        .collect()
}

/// Reads the example-submission table.
pub(crate) fn read_submission<R>(table: &str, reader: R) -> Result<Vec<SubmissionRecord>, DataError>
where
    R: io::Read,
{
    read_rows::<_, SubmissionRow>(table, reader)?
        .into_iter()
        .map(|(line, row)| {
            Ok(SubmissionRecord {
                passenger_id: row.passenger_id,
                survived: parse_flag(table, line, row.survived)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAIN: &str = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S
2,1,1,\"Cumings, Mrs. John Bradley (Florence Briggs Thayer)\",female,38,1,0,PC 17599,71.2833,C85,C
6,0,3,\"Moran, Mr. James\",male,,0,0,330877,8.4583,,Q
62,1,1,\"Icard, Miss. Amelie\",female,38,0,0,113572,80,B28,
";

    #[test]
    fn test_read_training_rows() {
        let rows = read_training("train.csv", TRAIN.as_bytes()).unwrap();
        assert_eq!(rows.len(), 4);

        let braund = &rows[0];
        assert_eq!(braund.passenger_id, 1);
        assert_eq!(braund.survived, Some(false));
        assert_eq!(braund.class, CabinClass::Third);
        assert_eq!(braund.name.as_deref(), Some("Braund, Mr. Owen Harris"));
        assert_eq!(braund.age, Some(22.0));
        assert_eq!(braund.cabin, None);
        assert_eq!(braund.embarked.as_deref(), Some("S"));

        assert_eq!(rows[2].age, None);
        assert_eq!(rows[3].embarked, None);
    }

    #[test]
    fn test_test_table_has_no_outcome() {
        let test = "\
PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1044,3,\"Storey, Mr. Thomas\",male,60.5,0,0,3701,,,S
";
        let rows = read_passengers("test.csv", test.as_bytes()).unwrap();
        assert_eq!(rows[0].survived, None);
        assert_eq!(rows[0].fare, None);
    }

    #[test]
    fn test_training_without_outcome_column_is_rejected() {
        let test = "\
PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
892,3,\"Kelly, Mr. James\",male,34.5,0,0,330911,7.8292,,Q
";
        let err = read_training("train.csv", test.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingOutcome { line: 2, .. }));
    }

    #[test]
    fn test_missing_outcome_line_after_multiline_name() {
        let train = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1,0,3,\"Braund,
 Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S
2,,1,\"Cumings, Mrs. John Bradley\",female,38,1,0,PC 17599,71.2833,C85,C
";
        let err = read_training("train.csv", train.as_bytes()).unwrap_err();
        match err {
            DataError::MissingOutcome { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_class_reports_line() {
        let bad = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1,0,3,A,male,22,1,0,T,7.25,,S
2,1,4,B,female,38,1,0,T,71.28,,C
";
        let err = read_training("train.csv", bad.as_bytes()).unwrap_err();
        match err {
            DataError::InvalidRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_outcome_is_rejected() {
        let bad = "PassengerId,Survived\n892,2\n";
        let err = read_submission("gender_submission.csv", bad.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord { .. }));
    }

    #[test]
    fn test_read_submission() {
        let rows = read_submission("gender_submission.csv", "PassengerId,Survived\n892,0\n893,1\n".as_bytes())
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].survived);
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let bad = "PassengerId,Survived\nabc,0\n";
        let err = read_submission("gender_submission.csv", bad.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }
}
