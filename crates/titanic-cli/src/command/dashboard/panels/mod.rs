//! Per-panel rendering and interaction state.
//!
//! Stateless panels are plain render functions over the data store;
//! interactive panels keep their form or scroll state in a struct.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

pub(crate) use self::{
    age::render_age,
    correlation::render_correlation,
    overview::{OverviewPanel, OverviewView},
    prediction::{PredictionPanel, PredictionView},
    search::{SearchPanel, SearchView},
    survival::{render_class, render_port, render_sex},
};
use crate::{
    command::dashboard::{captions, menu::PanelId},
    ui::widgets::style,
};

mod age;
mod correlation;
mod overview;
mod prediction;
mod search;
mod survival;

/// Draws the panel's caption at the bottom of `area` and returns the space above it.
pub(crate) fn render_caption(panel: PanelId, area: Rect, buf: &mut Buffer) -> Rect {
    render_lines(captions::caption(panel), area, buf)
}

/// Draws wrapped caption lines at the bottom of `area` and returns the space above them.
pub(crate) fn render_lines(lines: &[&str], area: Rect, buf: &mut Buffer) -> Rect {
    let width = usize::from(area.width.max(1));
    let rows = lines
        .iter()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum::<usize>();
    let height = u16::try_from(rows).unwrap_or(u16::MAX).min(area.height);
    let [body, caption_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(height)]).areas(area);

    Paragraph::new(
        lines
            .iter()
            .map(|line| Line::styled(*line, style::CAPTION))
            .collect::<Vec<_>>(),
    )
    .wrap(Wrap { trim: true })
    .render(caption_area, buf);
    body
}
