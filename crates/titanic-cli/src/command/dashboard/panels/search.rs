use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use titanic_analysis::search::{SearchOutcome, search_by_name};
use titanic_data::{DataStore, TableView};

use crate::{
    command::dashboard::{captions, menu::PanelId},
    ui::widgets::{DataTable, Palette, style},
};

/// Name query typed into the search panel.
#[derive(Debug, Clone, Default)]
pub(crate) struct SearchPanel {
    query: String,
    offset: usize,
}

impl SearchPanel {
    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn handle_key(&mut self, key: &KeyEvent, store: &DataStore) {
        match key.code {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.offset = 0;
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.offset = 0;
            }
            KeyCode::Up => self.offset = self.offset.saturating_sub(1),
            KeyCode::Down => {
                let count = search_by_name(store.train(), &self.query).match_count();
                self.offset = (self.offset + 1).min(count.saturating_sub(1));
            }
            _ => {}
        }
    }
}

#[derive(Debug)]
pub(crate) struct SearchView<'a> {
    pub panel: &'a SearchPanel,
    pub store: &'a DataStore,
    pub focused: bool,
}

impl Widget for SearchView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [input_area, status_area, table_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let cursor = if self.focused { "_" } else { "" };
        Paragraph::new(Line::raw(format!("{}{cursor}", self.panel.query)))
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(Line::styled(captions::title(PanelId::Search), style::TITLE))
                    .title_bottom(Line::styled(captions::SEARCH_PROMPT, style::HELP))
                    .border_style(if self.focused {
                        style::FOCUSED_BORDER
                    } else {
                        Style::new()
                    }),
            )
            .render(input_area, buf);

        match search_by_name(self.store.train(), &self.panel.query) {
            SearchOutcome::Idle => {
                Line::styled(" Type to search passenger names.", style::HELP)
                    .render(status_area, buf);
            }
            SearchOutcome::NoResults => {
                Line::styled(" No results found.", style::WARNING).render(status_area, buf);
            }
            SearchOutcome::Matches(matches) => {
                Line::styled(format!(" {} passengers found.", matches.len()), style::SUCCESS)
                    .render(status_area, buf);
                let view = TableView::passengers(matches, true);
                DataTable {
                    title: "Search results",
                    view: &view,
                    palette: Palette::Oranges,
                    offset: self.panel.offset,
                    focused: self.focused,
                }
                .render(table_area, buf);
            }
        }
    }
}
