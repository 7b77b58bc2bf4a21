//! Fixed narrative text shown under each panel.

use crate::command::dashboard::menu::PanelId;

pub(crate) const OVERVIEW_TRAIN: &str = "Training data preview";
pub(crate) const OVERVIEW_TEST: &str = "Test data";
pub(crate) const OVERVIEW_SUBMISSION: &str = "Submission format example";

pub(crate) const PREDICTION_DISCLAIMER: [&str; 2] = [
    "This is a simple prediction model.",
    "It is based on patterns in the training data.",
];

pub(crate) const SEARCH_PROMPT: &str = "Enter a name (partial words work too):";

/// Panel heading.
pub(crate) fn title(panel: PanelId) -> &'static str {
    match panel {
        PanelId::Overview => "Data overview",
        PanelId::Sex => "Survival rate by sex",
        PanelId::Age => "Passenger age distribution",
        PanelId::Class => "Survival rate by cabin class",
        PanelId::Port => "Survival rate by port of embarkation",
        PanelId::Correlation => "Correlation between key features",
        PanelId::Prediction => "Predict my survival probability",
        PanelId::Search => "Passenger name search",
    }
}

/// Interpretation printed below the panel's chart.
pub(crate) fn caption(panel: PanelId) -> &'static [&'static str] {
    match panel {
        PanelId::Overview | PanelId::Prediction | PanelId::Search => &[],
        PanelId::Sex => &[
            "Conclusion: about 74% of female passengers survived, against about 19% of male passengers.",
        ],
        PanelId::Age => &[
            "Conclusion: most passengers were between 20 and 40 years old; the mean age was about 29.7.",
        ],
        PanelId::Class => &[
            "Conclusion: about 63% of first-class passengers survived, against about 24% in third class.",
        ],
        PanelId::Port => &[
            "Conclusion: about 55% of passengers from Cherbourg survived, against about 34% from Southampton.",
        ],
        PanelId::Correlation => &[
            "Stronger colours mean stronger correlation.",
            "Positive correlation: the values rise together.",
            "Negative correlation: the values move in opposite directions.",
        ],
    }
}
