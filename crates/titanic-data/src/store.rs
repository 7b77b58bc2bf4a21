use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use crate::{DataError, Passenger, SubmissionRecord, reader};

/// Locations of the three input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub train: PathBuf,
    pub test: PathBuf,
    pub submission: PathBuf,
}

impl DataFiles {
    /// Default file names, as distributed with the dataset.
    pub const DEFAULT_TRAIN: &'static str = "train.csv";
    pub const DEFAULT_TEST: &'static str = "test.csv";
    pub const DEFAULT_SUBMISSION: &'static str = "gender_submission.csv";

    /// Resolves the default file names inside `dir`.
    #[must_use]
    pub fn in_dir<P>(dir: P) -> Self
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        Self {
            train: dir.join(Self::DEFAULT_TRAIN),
            test: dir.join(Self::DEFAULT_TEST),
            submission: dir.join(Self::DEFAULT_SUBMISSION),
        }
    }

    fn all(&self) -> [&Path; 3] {
        [
            self.train.as_path(),
            self.test.as_path(),
            self.submission.as_path(),
        ]
    }
}

/// The three loaded tables.
///
/// Immutable after construction; panels only read from it.
#[derive(Debug, Clone)]
pub struct DataStore {
    train: Vec<Passenger>,
    test: Vec<Passenger>,
    submission: Vec<SubmissionRecord>,
}

impl DataStore {
    /// Creates a store from already-parsed tables.
    #[must_use]
    pub fn new(
        train: Vec<Passenger>,
        test: Vec<Passenger>,
        submission: Vec<SubmissionRecord>,
    ) -> Self {
        Self {
            train,
            test,
            submission,
        }
    }

    /// Loads all three tables from disk.
    ///
    /// Every file is checked for existence before any is parsed, so a
    /// missing file fails the whole load without partial results.
    pub fn load(files: &DataFiles) -> Result<Self, DataError> {
        if let Some(missing) = files.all().into_iter().find(|path| !path.is_file()) {
            return Err(DataError::MissingFile {
                path: missing.to_path_buf(),
            });
        }

        let store = Self {
            train: reader::read_training(&table_name(&files.train), open(&files.train)?)?,
            test: reader::read_passengers(&table_name(&files.test), open(&files.test)?)?,
            submission: reader::read_submission(
                &table_name(&files.submission),
                open(&files.submission)?,
            )?,
        };
        tracing::info!(
            train = store.train.len(),
            test = store.test.len(),
            submission = store.submission.len(),
            "loaded data store"
        );
        Ok(store)
    }

    /// Parses the three tables from arbitrary readers.
    pub fn from_readers<T, U, S>(train: T, test: U, submission: S) -> Result<Self, DataError>
    where
        T: io::Read,
        U: io::Read,
        S: io::Read,
    {
        Ok(Self {
            train: reader::read_training(DataFiles::DEFAULT_TRAIN, train)?,
            test: reader::read_passengers(DataFiles::DEFAULT_TEST, test)?,
            submission: reader::read_submission(DataFiles::DEFAULT_SUBMISSION, submission)?,
        })
    }

    /// Training passengers; every row has a known outcome.
    #[must_use]
    pub fn train(&self) -> &[Passenger] {
        &self.train
    }

    /// Test passengers; no row has an outcome.
    #[must_use]
    pub fn test(&self) -> &[Passenger] {
        &self.test
    }

    #[must_use]
    pub fn submission(&self) -> &[SubmissionRecord] {
        &self.submission
    }
}

fn table_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn open(path: &Path) -> Result<BufReader<File>, DataError> {
    tracing::debug!(path = %path.display(), "opening table");
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_fixtures(dir: &Path) {
        fs::write(
            dir.join("train.csv"),
            "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
             1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S\n",
        )
        .unwrap();
        fs::write(
            dir.join("test.csv"),
            "PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
             892,3,\"Kelly, Mr. James\",male,34.5,0,0,330911,7.8292,,Q\n",
        )
        .unwrap();
        fs::write(
            dir.join("gender_submission.csv"),
            "PassengerId,Survived\n892,0\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let store = DataStore::load(&DataFiles::in_dir(dir.path())).unwrap();
        assert_eq!(store.train().len(), 1);
        assert_eq!(store.test().len(), 1);
        assert_eq!(store.submission().len(), 1);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        fs::remove_file(dir.path().join("test.csv")).unwrap();

        let err = DataStore::load(&DataFiles::in_dir(dir.path())).unwrap_err();
        match err {
            DataError::MissingFile { path } => assert!(path.ends_with("test.csv")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_in_dir_uses_default_names() {
        let files = DataFiles::in_dir("data");
        assert_eq!(files.train, Path::new("data").join("train.csv"));
        assert_eq!(files.submission, Path::new("data").join("gender_submission.csv"));
    }
}
