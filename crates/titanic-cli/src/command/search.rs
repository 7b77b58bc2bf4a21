use titanic_analysis::search::{SearchOutcome, search_by_name};
use titanic_data::{DataStore, TableView};

use crate::{command::report, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SearchArg {
    /// Part of a passenger name; matched literally, ignoring case
    query: String,
    /// Print matching rows as JSON
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(arg: &SearchArg, store: &DataStore) -> anyhow::Result<()> {
    let outcome = search_by_name(store.train(), &arg.query);
    if arg.json {
        let matches = match &outcome {
            SearchOutcome::Matches(rows) => rows.as_slice(),
            SearchOutcome::Idle | SearchOutcome::NoResults => &[],
        };
        util::print_json(matches)?;
        return Ok(());
    }

    match outcome {
        SearchOutcome::Idle => println!("Enter a name to search for."),
        SearchOutcome::NoResults => println!("No results found."),
        SearchOutcome::Matches(rows) => {
            println!("{} passengers found.", rows.len());
            println!();
            report::print_table("Search results", &TableView::passengers(rows, true));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::dashboard::tests::sample_store;

    fn arg(query: &str, json: bool) -> SearchArg {
        SearchArg {
            query: query.to_owned(),
            json,
        }
    }

    #[test]
    fn test_run_each_outcome() {
        let store = sample_store();
        run(&arg("smith", false), &store).unwrap();
        run(&arg("zzz", false), &store).unwrap();
        run(&arg("", false), &store).unwrap();
    }

    #[test]
    fn test_run_json() {
        let store = sample_store();
        run(&arg("smith", true), &store).unwrap();
        run(&arg("zzz", true), &store).unwrap();
    }
}
