//! Panel computations for the Titanic dashboard.
//!
//! Every function in this crate is a pure computation over the read-only
//! [`DataStore`](titanic_data::DataStore) tables. Nothing is cached: callers
//! recompute on every render, and fitted encoders or models are returned as
//! plain values rather than stored globally.
//!
//! # Overview
//!
//! | module | panel |
//! |---|---|
//! | [`summary`] | sidebar passenger/survivor counts and survival rate |
//! | [`survival`] | survival rate grouped by sex, cabin class or port |
//! | [`age`] | age histogram with a density overlay |
//! | [`correlation`] | correlation matrix over six encoded features |
//! | [`predictor`] | logistic-regression survival probability |
//! | [`search`] | case-insensitive name search |
//!
//! [`encoder`] and [`logistic`] are the building blocks of the predictor.
//!
//! # Examples
//!
//! ```
//! use titanic_analysis::{format_percent, summary::SurvivalSummary};
//! use titanic_data::DataStore;
//!
//! let train = "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
//!              1,0,3,A,male,22,1,0,T,7.25,,S\n\
//!              2,1,1,B,female,38,1,0,T,71.28,C85,C\n";
//! let store = DataStore::from_readers(train.as_bytes(), &b"PassengerId,Pclass\n"[..], &b"PassengerId,Survived\n"[..])?;
//!
//! let summary = SurvivalSummary::from_passengers(store.train());
//! assert_eq!(summary.survivors, 1);
//! assert_eq!(summary.rate.map(format_percent).as_deref(), Some("50.00%"));
//! # Ok::<(), titanic_data::DataError>(())
//! ```

pub mod age;
pub mod correlation;
pub mod encoder;
pub mod logistic;
pub mod predictor;
pub mod search;
pub mod summary;
pub mod survival;

/// Formats a rate in `[0, 1]` as a percentage with two decimals (`0.3838` → `38.38%`).
#[must_use]
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.383_838), "38.38%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
