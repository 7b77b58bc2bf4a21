use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};
use titanic_data::{DataStore, TableView};

use crate::{
    command::dashboard::captions,
    ui::widgets::{DataTable, Palette},
};

const TABLES: [(&str, Palette); 3] = [
    (captions::OVERVIEW_TRAIN, Palette::Blues),
    (captions::OVERVIEW_TEST, Palette::Purples),
    (captions::OVERVIEW_SUBMISSION, Palette::Greens),
];

/// Head-of-table previews of the three inputs, each independently scrollable.
#[derive(Debug, Clone)]
pub(crate) struct OverviewPanel {
    preview_rows: usize,
    focused_table: usize,
    offsets: [usize; 3],
}

impl OverviewPanel {
    pub(crate) fn new(preview_rows: usize) -> Self {
        Self {
            preview_rows,
            focused_table: 0,
            offsets: [0; 3],
        }
    }

    fn views(&self, store: &DataStore) -> [TableView; 3] {
        let n = self.preview_rows;
        [
            TableView::passengers(store.train().iter().take(n), true),
            TableView::passengers(store.test().iter().take(n), false),
            TableView::submission(store.submission().iter().take(n)),
        ]
    }

    pub(crate) fn handle_key(&mut self, key: &KeyEvent, store: &DataStore) {
        let rows = [
            store.train().len(),
            store.test().len(),
            store.submission().len(),
        ]
        .map(|len| len.min(self.preview_rows));
        let last_row = rows[self.focused_table].saturating_sub(1);
        let offset = &mut self.offsets[self.focused_table];
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.focused_table = self.focused_table.checked_sub(1).unwrap_or(TABLES.len() - 1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focused_table = (self.focused_table + 1) % TABLES.len();
            }
            KeyCode::Up | KeyCode::Char('k') => *offset = offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => *offset = (*offset + 1).min(last_row),
            KeyCode::Home => *offset = 0,
            KeyCode::End => *offset = last_row,
            _ => {}
        }
    }
}

#[derive(Debug)]
pub(crate) struct OverviewView<'a> {
    pub panel: &'a OverviewPanel,
    pub store: &'a DataStore,
    pub focused: bool,
}

impl Widget for OverviewView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let views = self.panel.views(self.store);
        let areas: [Rect; 3] = Layout::vertical([Constraint::Fill(1); 3]).areas(area);
        for (i, ((view, (title, palette)), area)) in
            views.iter().zip(TABLES).zip(areas).enumerate()
        {
            DataTable {
                title,
                view,
                palette,
                offset: self.panel.offsets[i],
                focused: self.focused && self.panel.focused_table == i,
            }
            .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::dashboard::tests::sample_store;

    fn press(panel: &mut OverviewPanel, store: &DataStore, code: KeyCode) {
        panel.handle_key(&KeyEvent::from(code), store);
    }

    #[test]
    fn test_previews_are_limited() {
        let store = sample_store();
        let panel = OverviewPanel::new(2);
        let [train, test, submission] = panel.views(&store);
        assert_eq!(train.rows.len(), 2);
        assert_eq!(test.rows.len(), 2);
        assert_eq!(submission.rows.len(), 2);
        assert!(train.headers.contains(&"Survived"));
        assert!(!test.headers.contains(&"Survived"));
    }

    #[test]
    fn test_scroll_is_clamped_per_table() {
        let store = sample_store();
        let mut panel = OverviewPanel::new(10);
        for _ in 0..20 {
            press(&mut panel, &store, KeyCode::Down);
        }
        assert_eq!(panel.offsets[0], store.train().len().min(10) - 1);
        press(&mut panel, &store, KeyCode::Right);
        press(&mut panel, &store, KeyCode::Down);
        assert_eq!(panel.focused_table, 1);
        assert_eq!(panel.offsets[1], 1);
        press(&mut panel, &store, KeyCode::Left);
        press(&mut panel, &store, KeyCode::Left);
        assert_eq!(panel.focused_table, 2);
        press(&mut panel, &store, KeyCode::Up);
        assert_eq!(panel.offsets[2], 0);
    }
}
