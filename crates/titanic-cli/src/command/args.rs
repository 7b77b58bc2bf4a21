use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Args};
use titanic_data::{DataFiles, DataStore};

use crate::logging::{self, LogTarget};

/// Input file locations, shared by every command.
#[derive(Debug, Clone, Args)]
pub(crate) struct DataArgs {
    /// Directory containing the CSV files
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,
    /// Training table file name, relative to the data directory
    #[arg(long, global = true, default_value = DataFiles::DEFAULT_TRAIN)]
    train_file: PathBuf,
    /// Test table file name, relative to the data directory
    #[arg(long, global = true, default_value = DataFiles::DEFAULT_TEST)]
    test_file: PathBuf,
    /// Example submission file name, relative to the data directory
    #[arg(long, global = true, default_value = DataFiles::DEFAULT_SUBMISSION)]
    submission_file: PathBuf,
}

impl DataArgs {
    pub(crate) fn files(&self) -> DataFiles {
        DataFiles {
            train: self.data_dir.join(&self.train_file),
            test: self.data_dir.join(&self.test_file),
            submission: self.data_dir.join(&self.submission_file),
        }
    }

    pub(crate) fn load(&self) -> anyhow::Result<DataStore> {
        DataStore::load(&self.files()).with_context(|| {
            format!(
                "Failed to load passenger data from {}",
                self.data_dir.display()
            )
        })
    }
}

#[derive(Debug, Clone, Args)]
pub(crate) struct LogArgs {
    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

impl LogArgs {
    /// Installs the subscriber.
    ///
    /// Without `--log-file`, logs go to stderr unless the terminal is taken
    /// over by the dashboard, in which case they are dropped.
    pub(crate) fn init(&self, owns_terminal: bool) -> anyhow::Result<()> {
        let target = match (self.log_file.as_deref(), owns_terminal) {
            (Some(path), _) => LogTarget::File(path),
            (None, false) => LogTarget::Stderr,
            (None, true) => LogTarget::Discard,
        };
        logging::init(self.verbose, target)
    }
}
