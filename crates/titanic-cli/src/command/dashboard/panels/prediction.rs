//! Survival prediction form.
//!
//! The classifier is refit whenever the panel is activated and on every key
//! press inside it; nothing is cached between interactions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize as _},
    symbols::merge::MergeStrategy,
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Widget},
};
use titanic_analysis::{
    format_percent,
    logistic::FitError,
    predictor::{
        AGE_RANGE, DEFAULT_AGE, DEFAULT_FARE, FARE_RANGE, PredictionInput, SurvivalPredictor,
    },
};
use titanic_data::{CabinClass, DataStore};

use crate::{
    command::dashboard::{captions, menu::PanelId, panels::render_lines},
    ui::widgets::style,
};

const FARE_STEP: f64 = 1.0;
const AGE_PAGE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Class,
    Sex,
    Age,
    Fare,
    Port,
    Submit,
}

impl Field {
    const ALL: [Self; 6] = [
        Self::Class,
        Self::Sex,
        Self::Age,
        Self::Fare,
        Self::Port,
        Self::Submit,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Class => "Cabin class (Pclass)",
            Self::Sex => "Sex",
            Self::Age => "Age",
            Self::Fare => "Fare",
            Self::Port => "Port of embarkation",
            Self::Submit => "",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub(crate) enum PredictionPhase {
    /// The panel has never been shown.
    Idle,
    CollectingInput,
    Predicting,
    ShowingResult { probability: f64 },
    Failed { message: String },
}

#[derive(Debug, Clone)]
pub(crate) struct PredictionPanel {
    max_iter: usize,
    predictor: Option<Result<SurvivalPredictor, FitError>>,
    phase: PredictionPhase,
    field: Field,
    class: CabinClass,
    sex: usize,
    age: u8,
    fare: f64,
    fare_input: String,
    /// Set once the fare text has been typed into; until then the next
    /// character replaces the committed value.
    fare_editing: bool,
    port: usize,
}

impl PredictionPanel {
    pub(crate) fn new(max_iter: usize) -> Self {
        Self {
            max_iter,
            predictor: None,
            phase: PredictionPhase::Idle,
            field: Field::Class,
            class: CabinClass::First,
            sex: 0,
            age: DEFAULT_AGE,
            fare: DEFAULT_FARE,
            fare_input: format_fare(DEFAULT_FARE),
            fare_editing: false,
            port: 0,
        }
    }

    pub(crate) fn phase(&self) -> &PredictionPhase {
        &self.phase
    }

    /// Called when the panel becomes the active menu selection.
    pub(crate) fn activate(&mut self, store: &DataStore) {
        self.refit(store);
        if self.phase.is_idle() {
            self.phase = PredictionPhase::CollectingInput;
        }
    }

    fn refit(&mut self, store: &DataStore) {
        let fitted = SurvivalPredictor::fit(store.train(), self.max_iter);
        match &fitted {
            Ok(predictor) => {
                self.sex = self
                    .sex
                    .min(predictor.sex_categories().len().saturating_sub(1));
                self.port = self
                    .port
                    .min(predictor.port_categories().len().saturating_sub(1));
            }
            Err(err) => tracing::warn!(%err, "survival predictor could not be fitted"),
        }
        self.predictor = Some(fitted);
    }

    fn fitted(&self) -> Option<&SurvivalPredictor> {
        self.predictor.as_ref()?.as_ref().ok()
    }

    fn input(&self) -> Option<PredictionInput> {
        let predictor = self.fitted()?;
        Some(PredictionInput {
            class: self.class,
            sex: predictor.sex_categories().get(self.sex)?.clone(),
            age: f64::from(self.age),
            fare: self.fare,
            port: predictor.port_categories().get(self.port)?.clone(),
        })
    }

    pub(crate) fn handle_key(&mut self, key: &KeyEvent, store: &DataStore) {
        self.refit(store);

        let before = self.snapshot();
        match key.code {
            KeyCode::Up => self.move_field(-1),
            KeyCode::Down => self.move_field(1),
            KeyCode::Enter => {
                self.commit_fare();
                self.submit();
                return;
            }
            KeyCode::Left => self.adjust(-1),
            KeyCode::Right => self.adjust(1),
            KeyCode::PageDown if self.field == Field::Age => {
                self.age = self.age.saturating_sub(AGE_PAGE).max(*AGE_RANGE.start());
            }
            KeyCode::PageUp if self.field == Field::Age => {
                self.age = self.age.saturating_add(AGE_PAGE).min(*AGE_RANGE.end());
            }
            KeyCode::Char(c) if self.field == Field::Fare && (c.is_ascii_digit() || c == '.') => {
                if !self.fare_editing {
                    self.fare_input.clear();
                    self.fare_editing = true;
                }
                self.fare_input.push(c);
            }
            KeyCode::Backspace if self.field == Field::Fare => {
                self.fare_editing = true;
                self.fare_input.pop();
            }
            _ => {}
        }

        if self.snapshot() != before {
            // Any edit invalidates the previous result.
            self.phase = PredictionPhase::CollectingInput;
        }
    }

    fn snapshot(&self) -> (CabinClass, usize, u8, u64, usize, String) {
        (
            self.class,
            self.sex,
            self.age,
            self.fare.to_bits(),
            self.port,
            self.fare_input.clone(),
        )
    }

    fn move_field(&mut self, delta: isize) {
        if self.field == Field::Fare {
            self.commit_fare();
        }
        let len = Field::ALL.len();
        let next = (self.field.index() + len).saturating_add_signed(delta) % len;
        self.field = Field::ALL[next];
    }

    fn adjust(&mut self, delta: i8) {
        let (sexes, ports) = self.fitted().map_or((0, 0), |p| {
            (p.sex_categories().len(), p.port_categories().len())
        });
        match self.field {
            Field::Class => {
                let number = self.class.number().saturating_add_signed(delta).clamp(1, 3);
                self.class = CabinClass::try_from(number).unwrap_or(self.class);
            }
            Field::Sex => self.sex = cycle(self.sex, sexes, delta),
            Field::Port => self.port = cycle(self.port, ports, delta),
            Field::Age => {
                self.age = self
                    .age
                    .saturating_add_signed(delta)
                    .clamp(*AGE_RANGE.start(), *AGE_RANGE.end());
            }
            Field::Fare => {
                self.commit_fare();
                self.fare = clamp_fare(self.fare + f64::from(delta) * FARE_STEP);
                self.fare_input = format_fare(self.fare);
            }
            Field::Submit => {}
        }
    }

    /// Parses the fare being typed; invalid text falls back to the last valid fare.
    fn commit_fare(&mut self) {
        if let Ok(fare) = self.fare_input.parse::<f64>() {
            self.fare = clamp_fare(fare);
        }
        self.fare_input = format_fare(self.fare);
        self.fare_editing = false;
    }

    fn submit(&mut self) {
        let Some(input) = self.input() else {
            self.phase = PredictionPhase::Failed {
                message: "no model available".to_owned(),
            };
            return;
        };
        self.phase = PredictionPhase::Predicting;
        tracing::debug!(?input, "predicting survival");
        self.phase = match self.fitted().map(|p| p.predict(&input)) {
            Some(Ok(probability)) => PredictionPhase::ShowingResult { probability },
            Some(Err(err)) => PredictionPhase::Failed {
                message: err.to_string(),
            },
            None => PredictionPhase::Failed {
                message: "no model available".to_owned(),
            },
        };
    }
}

fn cycle(index: usize, len: usize, delta: i8) -> usize {
    if len == 0 {
        return 0;
    }
    (index + len).saturating_add_signed(isize::from(delta)) % len
}

fn clamp_fare(fare: f64) -> f64 {
    if fare.is_finite() {
        fare.clamp(*FARE_RANGE.start(), *FARE_RANGE.end())
    } else {
        *FARE_RANGE.start()
    }
}

fn format_fare(fare: f64) -> String {
    format!("{fare:.2}")
}

#[derive(Debug)]
pub(crate) struct PredictionView<'a> {
    pub panel: &'a PredictionPanel,
    pub focused: bool,
}

impl PredictionView<'_> {
    fn field_value(&self, field: Field) -> String {
        let panel = self.panel;
        let category = |list: Option<&[String]>, i: usize| {
            list.and_then(|l| l.get(i))
                .map_or_else(|| "-".to_owned(), |s| format!("◀ {s} ▶"))
        };
        match field {
            Field::Class => format!("◀ {} ▶", panel.class),
            Field::Sex => category(panel.fitted().map(SurvivalPredictor::sex_categories), panel.sex),
            Field::Age => panel.age.to_string(),
            Field::Fare if self.focused && panel.field == Field::Fare => {
                format!("{}_", panel.fare_input)
            }
            Field::Fare => format_fare(panel.fare),
            Field::Port => category(
                panel.fitted().map(SurvivalPredictor::port_categories),
                panel.port,
            ),
            Field::Submit => "[ Predict ]".to_owned(),
        }
    }
}

impl Widget for PredictionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title(Line::styled(captions::title(PanelId::Prediction), style::TITLE))
            .border_style(if self.focused {
                style::FOCUSED_BORDER
            } else {
                Style::new()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        let [heading_area, form_area, _, result_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(u16::try_from(Field::ALL.len()).unwrap_or(u16::MAX)),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Line::from(" Enter your details".bold()).render(heading_area, buf);

        let rows: [Rect; 6] = Layout::vertical([Constraint::Length(1); 6]).areas(form_area);
        for (field, row) in Field::ALL.into_iter().zip(rows) {
            let selected = self.focused && self.panel.field == field;
            let marker = if selected { ">> " } else { "   " };
            let [label_area, value_area] =
                Layout::horizontal([Constraint::Length(26), Constraint::Fill(1)]).areas(row);
            let label_style = if selected { style::HIGHLIGHT } else { Style::new() };
            Line::from(vec![Span::raw(marker), Span::styled(field.label(), label_style)])
                .render(label_area, buf);

            if field == Field::Age {
                let span = f64::from(*AGE_RANGE.end() - *AGE_RANGE.start());
                let ratio = f64::from(self.panel.age - *AGE_RANGE.start()) / span;
                Gauge::default()
                    .ratio(ratio.clamp(0.0, 1.0))
                    .label(format!("{} (0-80)", self.panel.age))
                    .gauge_style(style::GAUGE)
                    .render(value_area.intersection(Rect { width: 30, ..value_area }), buf);
            } else {
                let value_style = if selected { style::HIGHLIGHT } else { Style::new() };
                Line::styled(self.field_value(field), value_style).render(value_area, buf);
            }
        }

        let mut lines = Vec::new();
        match (&self.panel.predictor, self.panel.phase()) {
            (Some(Err(err)), _) => {
                lines.push(Line::styled(format!(" Model could not be fitted: {err}"), style::ERROR));
            }
            (_, PredictionPhase::Idle | PredictionPhase::CollectingInput) => {
                lines.push(Line::styled(" Press Enter to predict.", style::HELP));
            }
            (_, PredictionPhase::Predicting) => {
                lines.push(Line::raw(" Predicting..."));
            }
            (_, PredictionPhase::ShowingResult { probability }) => {
                lines.push(Line::styled(
                    format!(" Predicted survival probability: {}", format_percent(*probability)),
                    style::SUCCESS,
                ));
            }
            (_, PredictionPhase::Failed { message }) => {
                lines.push(Line::styled(format!(" Prediction failed: {message}"), style::ERROR));
            }
        }
        Paragraph::new(lines).render(result_area, buf);

        if self.panel.phase().is_showing_result() {
            let [_, disclaimer_area] =
                Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(result_area);
            render_lines(&captions::PREDICTION_DISCLAIMER, disclaimer_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{command::dashboard::tests::sample_store, ui::widgets::buffer_lines};

    fn press(panel: &mut PredictionPanel, store: &DataStore, code: KeyCode) {
        panel.handle_key(&KeyEvent::from(code), store);
    }

    #[test]
    fn test_lifecycle() {
        let store = sample_store();
        let mut panel = PredictionPanel::new(500);
        assert!(panel.phase().is_idle());

        panel.activate(&store);
        assert!(panel.phase().is_collecting_input());

        press(&mut panel, &store, KeyCode::Enter);
        let PredictionPhase::ShowingResult { probability } = *panel.phase() else {
            panic!("unexpected phase {:?}", panel.phase());
        };
        assert!((0.0..=1.0).contains(&probability));

        // Editing a field hides the stale result.
        press(&mut panel, &store, KeyCode::Right);
        assert!(panel.phase().is_collecting_input());
        assert_eq!(panel.class, CabinClass::Second);
    }

    #[test]
    fn test_same_input_gives_same_probability() {
        let store = sample_store();
        let mut panel = PredictionPanel::new(500);
        panel.activate(&store);
        press(&mut panel, &store, KeyCode::Enter);
        let first = panel.phase().clone();
        press(&mut panel, &store, KeyCode::Enter);
        assert_eq!(*panel.phase(), first);
    }

    #[test]
    fn test_defaults_and_clamping() {
        let store = sample_store();
        let mut panel = PredictionPanel::new(500);
        panel.activate(&store);
        let input = panel.input().unwrap();
        assert_eq!(input.class, CabinClass::First);
        assert_eq!(input.age, 30.0);
        assert_eq!(input.fare, 30.0);
        assert_eq!(input.sex, "female");
        assert_eq!(input.port, "C");

        // Class stays within 1..=3.
        press(&mut panel, &store, KeyCode::Left);
        assert_eq!(panel.class, CabinClass::First);

        // Age slider.
        press(&mut panel, &store, KeyCode::Down);
        press(&mut panel, &store, KeyCode::Down);
        for _ in 0..10 {
            press(&mut panel, &store, KeyCode::PageUp);
        }
        assert_eq!(panel.age, 80);

        // Fare entry is clamped to the accepted range.
        press(&mut panel, &store, KeyCode::Down);
        for c in "9999".chars() {
            press(&mut panel, &store, KeyCode::Char(c));
        }
        press(&mut panel, &store, KeyCode::Down);
        assert_eq!(panel.fare, 600.0);
        assert_eq!(panel.fare_input, "600.00");
    }

    #[test]
    fn test_typed_fare_replaces_default() {
        let store = sample_store();
        let mut panel = PredictionPanel::new(500);
        panel.activate(&store);
        for _ in 0..3 {
            press(&mut panel, &store, KeyCode::Down);
        }
        assert_eq!(panel.field, Field::Fare);
        for c in "100".chars() {
            press(&mut panel, &store, KeyCode::Char(c));
        }
        assert_eq!(panel.fare_input, "100");
        press(&mut panel, &store, KeyCode::Down);
        assert_eq!(panel.fare, 100.0);

        // Coming back to the field replaces the committed value again.
        press(&mut panel, &store, KeyCode::Up);
        press(&mut panel, &store, KeyCode::Char('7'));
        press(&mut panel, &store, KeyCode::Enter);
        assert_eq!(panel.fare, 7.0);
    }

    #[test]
    fn test_backspace_edits_committed_fare() {
        let store = sample_store();
        let mut panel = PredictionPanel::new(500);
        panel.activate(&store);
        for _ in 0..3 {
            press(&mut panel, &store, KeyCode::Down);
        }
        // "30.00" -> "30.0" -> "30.05"
        press(&mut panel, &store, KeyCode::Backspace);
        press(&mut panel, &store, KeyCode::Char('5'));
        press(&mut panel, &store, KeyCode::Enter);
        assert_eq!(panel.fare, 30.05);
    }

    #[test]
    fn test_categories_cycle() {
        let store = sample_store();
        let mut panel = PredictionPanel::new(500);
        panel.activate(&store);
        press(&mut panel, &store, KeyCode::Down);
        press(&mut panel, &store, KeyCode::Right);
        assert_eq!(panel.input().unwrap().sex, "male");
        press(&mut panel, &store, KeyCode::Right);
        assert_eq!(panel.input().unwrap().sex, "female");
        for _ in 0..3 {
            press(&mut panel, &store, KeyCode::Down);
        }
        press(&mut panel, &store, KeyCode::Left);
        assert_eq!(panel.input().unwrap().port, "S");
    }

    #[test]
    fn test_renders_result_and_disclaimer() {
        let store = sample_store();
        let mut panel = PredictionPanel::new(500);
        panel.activate(&store);
        press(&mut panel, &store, KeyCode::Enter);

        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        PredictionView {
            panel: &panel,
            focused: true,
        }
        .render(area, &mut buf);
        let text = buffer_lines(&buf).join("\n");
        assert!(text.contains("Predicted survival probability:"));
        assert!(text.contains(captions::PREDICTION_DISCLAIMER[0]));
        assert!(text.contains("◀ female ▶"));
    }
}
