use std::ops::RangeInclusive;

use anyhow::{Context as _, ensure};
use serde::Serialize;
use titanic_analysis::{
    format_percent,
    predictor::{
        AGE_RANGE, DEFAULT_MAX_ITER, FARE_RANGE, PredictionInput, SurvivalPredictor,
    },
};
use titanic_data::{CabinClass, DataStore};

use crate::{command::dashboard::captions, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PredictArg {
    /// Cabin class (1, 2 or 3)
    #[arg(long)]
    class: u8,
    /// Sex, as recorded in the training table (e.g. `female`)
    #[arg(long)]
    sex: String,
    /// Age in years (0-80)
    #[arg(long)]
    age: f64,
    /// Fare paid (0-600)
    #[arg(long)]
    fare: f64,
    /// Embarkation code (e.g. `S`)
    #[arg(long)]
    port: String,
    /// Iteration cap for the model fit
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl PredictArg {
    fn input(&self) -> anyhow::Result<PredictionInput> {
        let class = CabinClass::try_from(self.class).map_err(anyhow::Error::msg)?;
        let age_range = f64::from(*AGE_RANGE.start())..=f64::from(*AGE_RANGE.end());
        check_range("age", self.age, &age_range)?;
        check_range("fare", self.fare, &FARE_RANGE)?;
        Ok(PredictionInput {
            class,
            sex: self.sex.clone(),
            age: self.age,
            fare: self.fare,
            port: self.port.clone(),
        })
    }
}

fn check_range(name: &str, value: f64, range: &RangeInclusive<f64>) -> anyhow::Result<()> {
    ensure!(
        range.contains(&value),
        "{name} must be between {} and {} (got {value})",
        range.start(),
        range.end()
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct PredictionReport<'a> {
    input: &'a PredictionInput,
    probability: f64,
    training_rows: usize,
    iterations: usize,
    converged: bool,
}

pub(crate) fn run(arg: &PredictArg, store: &DataStore) -> anyhow::Result<()> {
    let input = arg.input()?;
    let predictor = SurvivalPredictor::fit(store.train(), arg.max_iter)
        .context("Failed to fit the survival model")?;
    let probability = predictor
        .predict(&input)
        .with_context(|| format!("Failed to predict survival for {input:?}"))?;

    if arg.json {
        util::print_json(&PredictionReport {
            input: &input,
            probability,
            training_rows: predictor.training_rows(),
            iterations: predictor.model().iterations(),
            converged: predictor.model().converged(),
        })?;
    } else {
        println!(
            "Predicted survival probability: {}",
            format_percent(probability)
        );
        println!();
        for line in captions::PREDICTION_DISCLAIMER {
            println!("{line}");
        }
    }
    Ok(())
}
