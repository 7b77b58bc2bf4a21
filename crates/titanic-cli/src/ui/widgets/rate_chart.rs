use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Bar, BarChart, Block, Widget},
};

use crate::ui::widgets::style;

/// Integer resolution of the bar heights; the y axis spans `[0, SCALE]`.
const SCALE: u64 = 1000;
const MAX_BAR_WIDTH: u16 = 14;
const BAR_GAP: u16 = 3;
const BAR_COLORS: [Color; 4] = [
    Color::Rgb(161, 201, 244),
    Color::Rgb(255, 180, 130),
    Color::Rgb(141, 229, 161),
    Color::Rgb(255, 159, 155),
];
const REFERENCE_SYMBOL: &str = "╌";

/// A single group's bar.
#[derive(Debug, Clone, PartialEq)]
pub struct RateBar {
    pub label: String,
    /// Survival rate in `[0, 1]`.
    pub rate: f64,
    /// Value label printed on the bar.
    pub text: String,
}

/// Vertical bar chart of rates with the y axis fixed to `[0, 1]`.
///
/// An optional reference rate is drawn as a dashed line across the empty
/// space above the bars and described in a legend line. An optional note
/// gets a line of its own below the legend.
#[derive(Debug)]
pub struct RateChart<'a> {
    pub title: &'a str,
    pub bars: &'a [RateBar],
    pub reference: Option<(&'a str, f64)>,
    pub note: Option<&'a str>,
}

impl Widget for RateChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title(Line::styled(self.title, style::TITLE));
        let inner = block.inner(area);
        block.render(area, buf);

        let [chart_area, legend_area, note_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(u16::from(self.reference.is_some())),
            Constraint::Length(u16::from(self.note.is_some())),
        ])
        .areas(inner);

        let bars = self
            .bars
            .iter()
            .zip(BAR_COLORS.iter().cycle())
            .map(|(bar, color)| {
                Bar::with_label(bar.label.clone(), to_scale(bar.rate))
                    .text_value(bar.text.clone())
                    .style(Style::new().fg(*color))
                    .value_style(Style::new().fg(Color::Black).bg(*color))
            })
            .collect::<Vec<_>>();
        let chart = BarChart::new(bars)
            .bar_width(bar_width(chart_area.width, self.bars.len()))
            .bar_gap(BAR_GAP)
            .max(SCALE);
        chart.render(chart_area, buf);

        if let Some((label, rate)) = self.reference {
            draw_reference_line(chart_area, rate, buf);
            Line::styled(format!("{REFERENCE_SYMBOL}{REFERENCE_SYMBOL} {label}"), style::CAPTION)
                .render(legend_area, buf);
        }
        if let Some(note) = self.note {
            Line::styled(note, style::CAPTION).render(note_area, buf);
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn to_scale(rate: f64) -> u64 {
    (rate.clamp(0.0, 1.0) * SCALE as f64).round() as u64
}

fn bar_width(width: u16, bars: usize) -> u16 {
    let Ok(bars) = u16::try_from(bars) else {
        return 1;
    };
    if bars == 0 {
        return 1;
    }
    (width.saturating_sub(BAR_GAP * (bars - 1)) / bars).clamp(1, MAX_BAR_WIDTH)
}

/// Returns the row of `area` at which `rate` falls, leaving the last row for labels.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn reference_row(area: Rect, rate: f64) -> Option<u16> {
    let bar_rows = area.height.checked_sub(1).filter(|h| *h > 0)?;
    let filled = (rate.clamp(0.0, 1.0) * f64::from(bar_rows)).round() as u16;
    let bottom = area.top() + bar_rows; // first row below the bars
    Some(bottom.saturating_sub(filled).clamp(area.top(), bottom - 1))
}

fn draw_reference_line(area: Rect, rate: f64, buf: &mut Buffer) {
    let Some(y) = reference_row(area, rate) else {
        return;
    };
    for x in area.left()..area.right() {
        let cell = &mut buf[(x, y)];
        if cell.symbol() == " " {
            cell.set_symbol(REFERENCE_SYMBOL).set_fg(Color::Gray);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_lines;

    fn bars() -> Vec<RateBar> {
        vec![
            RateBar {
                label: "female".into(),
                rate: 0.742,
                text: "0.74".into(),
            },
            RateBar {
                label: "male".into(),
                rate: 0.189,
                text: "0.19".into(),
            },
        ]
    }

    #[test]
    fn test_renders_labels_and_values() {
        let bars = bars();
        let area = Rect::new(0, 0, 40, 14);
        let mut buf = Buffer::empty(area);
        RateChart {
            title: "Survival rate by sex",
            bars: &bars,
            reference: None,
            note: None,
        }
        .render(area, &mut buf);

        let text = buffer_lines(&buf).join("\n");
        assert!(text.contains("Survival rate by sex"));
        assert!(text.contains("female"));
        assert!(text.contains("0.74"));
        assert!(text.contains("0.19"));
        assert!(!text.contains(REFERENCE_SYMBOL));
    }

    #[test]
    fn test_reference_line_and_legend() {
        let bars = bars();
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        RateChart {
            title: "Survival rate by class",
            bars: &bars,
            reference: Some(("Overall average survival rate: 38.38%", 0.3838)),
            note: None,
        }
        .render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[12].contains("Overall average survival rate: 38.38%"));
        assert!(lines[..12].iter().any(|l| l.contains(REFERENCE_SYMBOL)));
    }

    #[test]
    fn test_note_below_legend() {
        let bars = bars();
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        RateChart {
            title: "Survival rate by port",
            bars: &bars,
            reference: Some(("Overall average survival rate: 38.38%", 0.3838)),
            note: Some("2 rows without a known port excluded"),
        }
        .render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[11].contains("Overall average survival rate: 38.38%"));
        assert!(lines[12].contains("2 rows without a known port excluded"));
    }

    #[test]
    fn test_reference_row() {
        let area = Rect::new(0, 0, 10, 11);
        assert_eq!(reference_row(area, 0.0), Some(9));
        assert_eq!(reference_row(area, 0.5), Some(5));
        assert_eq!(reference_row(area, 1.0), Some(0));
        assert_eq!(reference_row(Rect::new(0, 0, 10, 1), 0.5), None);
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(40, 2), 14);
        assert_eq!(bar_width(20, 3), 4);
        assert_eq!(bar_width(2, 3), 1);
        assert_eq!(bar_width(10, 0), 1);
    }
}
