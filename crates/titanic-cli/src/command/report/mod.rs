//! Non-interactive rendering of the dashboard's figures.
//!
//! Each report kind prints the numbers behind one panel, either as an
//! aligned text table or as JSON.

use serde::Serialize;
use titanic_analysis::{
    age::AgeDistribution, correlation::CorrelationMatrix, summary::SurvivalSummary, survival,
};
use titanic_data::{DataStore, TableView};

pub(crate) use self::table::print_table;
use crate::{command::dashboard::captions, util};

mod table;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Which figures to print
    #[arg(value_enum)]
    kind: ReportKind,
    /// Rows shown in each overview preview
    #[arg(long, default_value_t = 10)]
    preview_rows: usize,
    /// Print JSON instead of a text table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ReportKind {
    /// Passenger, survivor and survival-rate totals
    Summary,
    /// Head of the training, test and submission tables
    Overview,
    /// Survival rate by sex
    Sex,
    /// Age histogram and mean
    Age,
    /// Survival rate by cabin class
    Class,
    /// Survival rate by port of embarkation
    Port,
    /// Correlation matrix of the encoded features
    Correlation,
}

#[derive(Debug, Serialize)]
struct OverviewReport {
    train: TableView,
    test: TableView,
    submission: TableView,
}

impl OverviewReport {
    fn new(store: &DataStore, rows: usize) -> Self {
        Self {
            train: TableView::passengers(store.train().iter().take(rows), true),
            test: TableView::passengers(store.test().iter().take(rows), false),
            submission: TableView::submission(store.submission().iter().take(rows)),
        }
    }
}

pub(crate) fn run(arg: &ReportArg, store: &DataStore) -> anyhow::Result<()> {
    let ReportArg {
        kind,
        preview_rows,
        json,
    } = arg;
    let train = store.train();
    tracing::debug!(?kind, json, "printing report");

    match kind {
        ReportKind::Summary => {
            let summary = SurvivalSummary::from_passengers(train);
            if *json {
                util::print_json(&summary)?;
            } else {
                table::print_summary(&summary);
            }
        }
        ReportKind::Overview => {
            let report = OverviewReport::new(store, *preview_rows);
            if *json {
                util::print_json(&report)?;
            } else {
                print_table(captions::OVERVIEW_TRAIN, &report.train);
                println!();
                print_table(captions::OVERVIEW_TEST, &report.test);
                println!();
                print_table(captions::OVERVIEW_SUBMISSION, &report.submission);
            }
        }
        ReportKind::Sex => {
            let breakdown = survival::by_sex(train);
            if *json {
                util::print_json(&breakdown)?;
            } else {
                table::print_breakdown("Survival rate by sex", "Sex", &breakdown);
            }
        }
        ReportKind::Class => {
            let breakdown = survival::by_class(train);
            if *json {
                util::print_json(&breakdown)?;
            } else {
                table::print_breakdown("Survival rate by cabin class", "Pclass", &breakdown);
            }
        }
        ReportKind::Port => {
            let breakdown = survival::by_port(train);
            if *json {
                util::print_json(&breakdown)?;
            } else {
                table::print_breakdown(
                    "Survival rate by port of embarkation",
                    "Embarked",
                    &breakdown,
                );
            }
        }
        ReportKind::Age => {
            let distribution = AgeDistribution::from_passengers(train);
            if *json {
                util::print_json(&distribution)?;
            } else {
                table::print_age(&distribution);
            }
        }
        ReportKind::Correlation => {
            let matrix = CorrelationMatrix::from_passengers(train);
            if *json {
                util::print_json(&matrix)?;
            } else {
                table::print_correlation(&matrix);
            }
        }
    }
    Ok(())
}
