use clap::{Parser, Subcommand};

use self::{
    args::{DataArgs, LogArgs},
    dashboard::DashboardArg,
    predict::PredictArg,
    report::ReportArg,
    search::SearchArg,
};

mod args;
mod dashboard;
mod predict;
mod report;
mod search;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    data: DataArgs,
    #[clap(flatten)]
    log: LogArgs,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand, derive_more::IsVariant)]
enum Mode {
    /// Interactive dashboard (default)
    Dashboard(#[clap(flatten)] DashboardArg),
    /// Print one panel's figures as a text table or JSON
    Report(#[clap(flatten)] ReportArg),
    /// Predict the survival probability of a hypothetical passenger
    Predict(#[clap(flatten)] PredictArg),
    /// Search training passengers by name
    Search(#[clap(flatten)] SearchArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args
        .mode
        .unwrap_or_else(|| Mode::Dashboard(DashboardArg::default()));

    args.log.init(mode.is_dashboard())?;
    // Every input file must load before anything is rendered.
    let store = args.data.load()?;

    match mode {
        Mode::Dashboard(arg) => dashboard::run(&arg, store)?,
        Mode::Report(arg) => report::run(&arg, &store)?,
        Mode::Predict(arg) => predict::run(&arg, &store)?,
        Mode::Search(arg) => search::run(&arg, &store)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_dashboard() {
        let args = CommandArgs::try_parse_from(["titanic"]).unwrap();
        assert!(args.mode.is_none());
        let files = args.data.files();
        assert_eq!(files.train, Path::new(".").join("train.csv"));
        assert_eq!(files.submission, Path::new(".").join("gender_submission.csv"));
    }

    #[test]
    fn test_global_data_options_after_subcommand() {
        let args = CommandArgs::try_parse_from([
            "titanic",
            "search",
            "smith",
            "--data-dir",
            "data",
            "--train-file",
            "alt.csv",
        ])
        .unwrap();
        assert!(args.mode.unwrap().is_search());
        assert_eq!(args.data.files().train, Path::new("data").join("alt.csv"));
    }

    #[test]
    fn test_predict_requires_features() {
        assert!(CommandArgs::try_parse_from(["titanic", "predict", "--class", "1"]).is_err());
        let args = CommandArgs::try_parse_from([
            "titanic", "predict", "--class", "2", "--sex", "male", "--age", "40", "--fare",
            "13.5", "--port", "S",
        ])
        .unwrap();
        assert!(args.mode.unwrap().is_predict());
    }
}
