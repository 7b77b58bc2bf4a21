use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, Cell, Row, StatefulWidget, Table, TableState, Widget},
};
use titanic_data::{CellValue, TableView};

use crate::ui::widgets::{Palette, contrast_text, style};

const MIN_COLUMN_WIDTH: usize = 3;
const MAX_COLUMN_WIDTH: usize = 28;

/// A table whose numeric cells are shaded by a per-column min-max gradient.
#[derive(Debug)]
pub struct DataTable<'a> {
    pub title: &'a str,
    pub view: &'a TableView,
    pub palette: Palette,
    /// Index of the first visible row.
    pub offset: usize,
    pub focused: bool,
}

impl Widget for DataTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let ranges = (0..self.view.headers.len())
            .map(|col| self.view.column_range(col))
            .collect::<Vec<_>>();

        let header = Row::new(self.view.headers.iter().map(|h| Cell::from(*h))).style(style::TITLE);
        let rows = self.view.rows.iter().map(|row| {
            Row::new(row.iter().zip(&ranges).map(|(cell, range)| {
                match (cell.as_number(), range) {
                    (Some(value), Some(range)) => {
                        let bg = self.palette.scaled(value, *range);
                        Cell::from(Line::from(cell.to_string()).right_aligned())
                            .style(Style::new().bg(bg).fg(contrast_text(bg)))
                    }
                    _ => Cell::from(cell.to_string()),
                }
            }))
        });

        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title(format!("{} ({} rows)", self.title, self.view.rows.len()))
            .border_style(if self.focused {
                style::FOCUSED_BORDER
            } else {
                Style::new()
            });
        let table = Table::new(rows, column_widths(self.view))
            .header(header)
            .block(block)
            .column_spacing(1);

        let mut state = TableState::default().with_offset(self.offset);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

fn column_widths(view: &TableView) -> Vec<Constraint> {
    view.headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let widest = view
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(display_width)
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
            Constraint::Length(u16::try_from(widest).unwrap_or(u16::MAX))
        })
        .collect()
}

fn display_width(cell: &CellValue) -> usize {
    match cell {
        CellValue::Text(s) => s.chars().count(),
        other => other.to_string().len(),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::ui::widgets::buffer_lines;

    fn view() -> TableView {
        TableView {
            headers: vec!["PassengerId", "Name", "Fare"],
            rows: vec![
                vec![
                    CellValue::Integer(1),
                    CellValue::Text("Braund, Mr. Owen Harris".into()),
                    CellValue::Float(7.25),
                ],
                vec![
                    CellValue::Integer(2),
                    CellValue::Text("Cumings, Mrs. John Bradley".into()),
                    CellValue::Missing,
                ],
                vec![
                    CellValue::Integer(3),
                    CellValue::Text("Heikkinen, Miss Laina".into()),
                    CellValue::Float(71.28),
                ],
            ],
        }
    }

    #[test]
    fn test_renders_headers_and_missing_values() {
        let view = view();
        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        DataTable {
            title: "Training data",
            view: &view,
            palette: Palette::Blues,
            offset: 0,
            focused: false,
        }
        .render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[0].contains("Training data (3 rows)"));
        assert!(lines[1].contains("PassengerId"));
        assert!(lines[2].contains("Braund, Mr. Owen Harris"));
        assert!(lines[3].contains("NaN"));
        assert!(lines[4].contains("71.28"));
    }

    #[test]
    fn test_numeric_cells_are_shaded() {
        let view = view();
        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        DataTable {
            title: "Training data",
            view: &view,
            palette: Palette::Blues,
            offset: 0,
            focused: false,
        }
        .render(area, &mut buf);

        // PassengerId column starts right after the left border.
        assert_eq!(buf[(1, 2)].bg, Palette::Blues.color(0.0));
        assert_eq!(buf[(1, 4)].bg, Palette::Blues.color(1.0));
        // Text cells keep the default background.
        assert_eq!(buf[(13, 2)].bg, Color::Reset);
    }

    #[test]
    fn test_offset_scrolls_rows() {
        let view = view();
        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        DataTable {
            title: "Training data",
            view: &view,
            palette: Palette::Blues,
            offset: 2,
            focused: true,
        }
        .render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[2].contains("Heikkinen"));
        assert!(!lines.iter().any(|l| l.contains("Braund")));
    }

    #[test]
    fn test_column_widths_are_clamped() {
        let widths = column_widths(&view());
        assert_eq!(
            widths,
            [
                Constraint::Length(11),
                Constraint::Length(26),
                Constraint::Length(5)
            ]
        );
    }
}
