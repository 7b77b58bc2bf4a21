use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, Widget},
};
use titanic_analysis::correlation::{CorrelationMatrix, format_coefficient};

use crate::ui::widgets::{coolwarm, contrast_text, style};

const LABEL_WIDTH: u16 = 10;
const MIN_CELL_WIDTH: u16 = 6;
const MAX_CELL_WIDTH: u16 = 12;
const UNDEFINED: Color = Color::DarkGray;

/// Annotated correlation heatmap on a diverging colour scale over `[-1, 1]`.
#[derive(Debug)]
pub struct Heatmap<'a> {
    pub title: &'a str,
    pub matrix: &'a CorrelationMatrix,
}

impl Widget for Heatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title(Line::styled(self.title, style::TITLE));
        let inner = block.inner(area);
        block.render(area, buf);

        let n = self.matrix.labels.len();
        let Ok(n16) = u16::try_from(n) else {
            return;
        };
        if n == 0 || inner.width <= LABEL_WIDTH || inner.height < 2 {
            return;
        }
        let cell_width =
            ((inner.width - LABEL_WIDTH) / n16).clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH);
        let cell_height = ((inner.height - 2) / n16).clamp(1, 3);
        let column_x = |j: u16| inner.x + LABEL_WIDTH + j * cell_width;

        // Column headers
        for (j, label) in (0..n16).zip(&self.matrix.labels) {
            let rect = Rect::new(column_x(j), inner.y, cell_width, 1).intersection(inner);
            Line::from(*label).alignment(Alignment::Center).render(rect, buf);
        }

        for (i, (label, row)) in (0..n16).zip(self.matrix.labels.iter().zip(&self.matrix.values)) {
            let y = inner.y + 1 + i * cell_height;
            let label_rect = Rect::new(inner.x, y + cell_height / 2, LABEL_WIDTH, 1).intersection(inner);
            Line::from(*label).render(label_rect, buf);

            for (j, value) in (0..n16).zip(row) {
                let rect = Rect::new(column_x(j), y, cell_width, cell_height).intersection(inner);
                if rect.is_empty() {
                    continue;
                }
                let bg = value.map_or(UNDEFINED, coolwarm);
                let fg = value.map_or(Color::Gray, |_| contrast_text(bg));
                buf.set_style(rect, Style::new().bg(bg).fg(fg));
                let text_rect = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1);
                Line::from(format_coefficient(*value))
                    .alignment(Alignment::Center)
                    .render(text_rect, buf);
            }
        }

        let legend_y = inner.y + 1 + n16 * cell_height;
        if legend_y < inner.bottom() {
            let legend = Rect::new(inner.x, legend_y, inner.width, 1);
            Line::styled("-1.00 cool (negative)  ...  warm (positive) 1.00", style::CAPTION)
                .render(legend, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_lines;

    fn matrix() -> CorrelationMatrix {
        CorrelationMatrix {
            labels: vec!["Survived", "Sex"],
            values: vec![vec![Some(1.0), Some(-0.54)], vec![Some(-0.54), None]],
        }
    }

    #[test]
    fn test_cells_are_annotated() {
        let matrix = matrix();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        Heatmap {
            title: "Correlation",
            matrix: &matrix,
        }
        .render(area, &mut buf);

        let text = buffer_lines(&buf).join("\n");
        assert!(text.contains("Survived"));
        assert!(text.contains("1.00"));
        assert!(text.contains("-0.54"));
        assert!(text.contains("nan"));
    }

    #[test]
    fn test_cells_are_coloured_by_value() {
        let matrix = matrix();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        Heatmap {
            title: "Correlation",
            matrix: &matrix,
        }
        .render(area, &mut buf);

        // inner starts at (1, 1); first matrix row is below the header line.
        let first_cell = (1 + LABEL_WIDTH, 2);
        assert_eq!(buf[first_cell].bg, coolwarm(1.0));
        let undefined_cell = (1 + LABEL_WIDTH + MAX_CELL_WIDTH, 2 + 3);
        assert_eq!(buf[undefined_cell].bg, UNDEFINED);
    }
}
