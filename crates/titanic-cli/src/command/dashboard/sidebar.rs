use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use titanic_analysis::{format_percent, summary::SurvivalSummary};

use crate::{command::dashboard::menu::Menu, ui::widgets::style};

/// Summary figures above the panel menu.
#[derive(Debug)]
pub(crate) struct Sidebar<'a> {
    pub summary: &'a SurvivalSummary,
    pub menu: &'a Menu,
    pub focused: bool,
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [summary_area, menu_area] =
            Layout::vertical([Constraint::Length(5), Constraint::Fill(1)]).areas(area);

        let rate = self
            .summary
            .rate
            .map_or_else(|| "-".to_owned(), format_percent);
        Paragraph::new(vec![
            Line::raw(format!(" Passengers:    {}", self.summary.passengers)),
            Line::raw(format!(" Survivors:     {}", self.summary.survivors)),
            Line::raw(format!(" Survival rate: {rate}")),
        ])
        .block(
            Block::bordered()
                .merge_borders(MergeStrategy::Exact)
                .title(Line::styled("Data summary", style::TITLE)),
        )
        .render(summary_area, buf);

        let items = self
            .menu
            .entries()
            .iter()
            .enumerate()
            .map(|(i, panel)| ListItem::new(format!("{}. {}", i + 1, panel.label())))
            .collect::<Vec<_>>();
        let list = List::new(items)
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(Line::styled("Titanic dashboard", style::TITLE))
                    .border_style(if self.focused {
                        style::FOCUSED_BORDER
                    } else {
                        Style::new()
                    }),
            )
            .highlight_style(style::HIGHLIGHT)
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(self.menu.selected_index());
        StatefulWidget::render(list, menu_area, buf, &mut list_state);
    }
}
