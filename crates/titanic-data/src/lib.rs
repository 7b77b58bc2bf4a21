//! Passenger records and the read-only data store behind the dashboard.
//!
//! The dashboard works on three CSV tables:
//!
//! ```text
//! DataStore
//! ├─ train:      Vec<Passenger>          (Survived present on every row)
//! ├─ test:       Vec<Passenger>          (no Survived column)
//! └─ submission: Vec<SubmissionRecord>   (PassengerId, Survived)
//! ```
//!
//! All three tables are loaded once by [`DataStore::load`] and never mutated
//! afterwards; every panel receives a shared reference to the store.
//!
//! # Examples
//!
//! ```
//! use titanic_data::DataStore;
//!
//! let train = "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
//!              1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S\n";
//! let test = "PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
//!             892,3,\"Kelly, Mr. James\",male,34.5,0,0,330911,7.8292,,Q\n";
//! let submission = "PassengerId,Survived\n892,0\n";
//!
//! let store = DataStore::from_readers(train.as_bytes(), test.as_bytes(), submission.as_bytes())?;
//! assert_eq!(store.train().len(), 1);
//! assert_eq!(store.train()[0].survived, Some(false));
//! # Ok::<(), titanic_data::DataError>(())
//! ```

use std::{io, path::PathBuf};

pub use self::{
    passenger::{CabinClass, Passenger, Port},
    store::{DataFiles, DataStore},
    submission::SubmissionRecord,
    table::{CellValue, TableView},
};

mod passenger;
mod reader;
mod store;
mod submission;
mod table;

/// Errors raised while loading the input tables.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DataError {
    #[display("input file not found: {}", path.display())]
    MissingFile { path: PathBuf },
    #[display("failed to open {}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("failed to parse {table}")]
    Csv { table: String, source: csv::Error },
    #[display("{table} line {line}: {reason}")]
    InvalidRecord {
        table: String,
        line: u64,
        reason: String,
    },
    #[display("{table} line {line}: missing Survived value")]
    MissingOutcome { table: String, line: u64 },
}
