//! Survival probability for a hypothetical passenger.
//!
//! The predictor is fit from scratch each time it is requested: training
//! rows missing age, port, sex or fare are dropped, sex and port are label
//! encoded, and a logistic regression is fit on five features:
//!
//! | feature | encoding |
//! |---|---|
//! | cabin class | `1`, `2` or `3` |
//! | sex | label code |
//! | age | years |
//! | fare | as recorded |
//! | port | label code |

use std::ops::RangeInclusive;

use serde::Serialize;
use titanic_data::{CabinClass, Passenger};

use crate::{
    encoder::{EncodingError, LabelEncoder},
    logistic::{FitError, FitOptions, LogisticRegression},
};

/// Default iteration cap for the solver.
pub const DEFAULT_MAX_ITER: usize = 500;

/// Accepted ages, in whole years.
pub const AGE_RANGE: RangeInclusive<u8> = 0..=80;
pub const DEFAULT_AGE: u8 = 30;

/// Accepted fares.
pub const FARE_RANGE: RangeInclusive<f64> = 0.0..=600.0;
pub const DEFAULT_FARE: f64 = 30.0;

/// Feature values for one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionInput {
    pub class: CabinClass,
    pub sex: String,
    pub age: f64,
    pub fare: f64,
    /// Embarkation code, e.g. `S`.
    pub port: String,
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PredictError {
    #[display("{_0}")]
    Encoding(EncodingError),
    #[display("{_0}")]
    Model(FitError),
}

/// Label encoders and regression model fitted on the cleaned training rows.
#[derive(Debug, Clone)]
pub struct SurvivalPredictor {
    sex_encoder: LabelEncoder,
    port_encoder: LabelEncoder,
    model: LogisticRegression,
    training_rows: usize,
}

struct CleanRow<'a> {
    class: CabinClass,
    sex: &'a str,
    age: f64,
    fare: f64,
    port: &'a str,
    survived: bool,
}

impl<'a> CleanRow<'a> {
    fn from_passenger(p: &'a Passenger) -> Option<Self> {
        Some(Self {
            class: p.class,
            sex: p.sex.as_deref()?,
            age: p.age?,
            fare: p.fare?,
            port: p.embarked.as_deref()?,
            survived: p.survived?,
        })
    }
}

impl SurvivalPredictor {
    /// Fits the encoders and the model on `passengers`.
    pub fn fit(passengers: &[Passenger], max_iter: usize) -> Result<Self, FitError> {
        let rows = passengers
            .iter()
            .filter_map(CleanRow::from_passenger)
            .collect::<Vec<_>>();
        let dropped = passengers.len() - rows.len();

        let sex_encoder = LabelEncoder::fit(rows.iter().map(|r| r.sex));
        let port_encoder = LabelEncoder::fit(rows.iter().map(|r| r.port));

        let mut x = Vec::with_capacity(rows.len());
        let mut y = Vec::with_capacity(rows.len());
        for row in &rows {
            // Encoders were fit on these same rows, so every value is known.
            let (Ok(sex), Ok(port)) = (
                sex_encoder.transform(row.sex),
                port_encoder.transform(row.port),
            ) else {
                continue;
            };
            x.push(features(row.class, sex, row.age, row.fare, port));
            y.push(row.survived);
        }

        let options = FitOptions {
            max_iter,
            ..FitOptions::default()
        };
        let model = LogisticRegression::fit(&x, &y, &options)?;
        tracing::info!(
            rows = x.len(),
            dropped,
            iterations = model.iterations(),
            converged = model.converged(),
            "fitted survival predictor"
        );

        Ok(Self {
            sex_encoder,
            port_encoder,
            model,
            training_rows: x.len(),
        })
    }

    /// Sex categories the predictor accepts.
    #[must_use]
    pub fn sex_categories(&self) -> &[String] {
        self.sex_encoder.classes()
    }

    /// Port codes the predictor accepts.
    #[must_use]
    pub fn port_categories(&self) -> &[String] {
        self.port_encoder.classes()
    }

    /// Number of training rows left after cleaning.
    #[must_use]
    pub fn training_rows(&self) -> usize {
        self.training_rows
    }

    #[must_use]
    pub fn model(&self) -> &LogisticRegression {
        &self.model
    }

    /// Form defaults: first class, age 30, fare 30, first known sex and port.
    #[must_use]
    pub fn default_input(&self) -> PredictionInput {
        PredictionInput {
            class: CabinClass::First,
            sex: self.sex_categories().first().cloned().unwrap_or_default(),
            age: f64::from(DEFAULT_AGE),
            fare: DEFAULT_FARE,
            port: self.port_categories().first().cloned().unwrap_or_default(),
        }
    }

    /// Returns the probability of survival for `input`.
    pub fn predict(&self, input: &PredictionInput) -> Result<f64, PredictError> {
        let sex = self.sex_encoder.transform(&input.sex)?;
        let port = self.port_encoder.transform(&input.port)?;
        let x = features(input.class, sex, input.age, input.fare, port);
        Ok(self.model.predict_probability(&x)?)
    }
}

#[expect(clippy::cast_precision_loss)]
fn features(class: CabinClass, sex: usize, age: f64, fare: f64, port: usize) -> Vec<f64> {
    vec![
        f64::from(class.number()),
        sex as f64,
        age,
        fare,
        port as f64,
    ]
}
