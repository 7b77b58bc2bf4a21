use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use titanic_analysis::{format_percent, survival};
use titanic_data::DataStore;

use crate::{
    command::dashboard::{captions, menu::PanelId, panels::render_caption},
    ui::widgets::{RateBar, RateChart},
};

fn overall_label(rate: Option<f64>) -> String {
    format!(
        "Overall average survival rate: {}",
        rate.map_or_else(|| "-".to_owned(), format_percent)
    )
}

pub(crate) fn render_sex(store: &DataStore, area: Rect, buf: &mut Buffer) {
    let breakdown = survival::by_sex(store.train());
    let bars = breakdown
        .groups
        .iter()
        .map(|g| RateBar {
            label: g.key.clone(),
            rate: g.rate,
            text: format!("{:.2}", g.rate),
        })
        .collect::<Vec<_>>();

    let body = render_caption(PanelId::Sex, area, buf);
    RateChart {
        title: captions::title(PanelId::Sex),
        bars: &bars,
        reference: None,
        note: None,
    }
    .render(body, buf);
}

pub(crate) fn render_class(store: &DataStore, area: Rect, buf: &mut Buffer) {
    let breakdown = survival::by_class(store.train());
    let bars = breakdown
        .groups
        .iter()
        .map(|g| RateBar {
            label: format!("Class {}", g.key),
            rate: g.rate,
            text: format_percent(g.rate),
        })
        .collect::<Vec<_>>();
    let overall = overall_label(breakdown.overall_rate);

    let body = render_caption(PanelId::Class, area, buf);
    RateChart {
        title: captions::title(PanelId::Class),
        bars: &bars,
        reference: breakdown.overall_rate.map(|rate| (overall.as_str(), rate)),
        note: None,
    }
    .render(body, buf);
}

pub(crate) fn render_port(store: &DataStore, area: Rect, buf: &mut Buffer) {
    let breakdown = survival::by_port(store.train());
    let bars = breakdown
        .groups
        .iter()
        .map(|g| RateBar {
            label: g.key.display_name().to_owned(),
            rate: g.rate,
            text: format_percent(g.rate),
        })
        .collect::<Vec<_>>();
    let overall = overall_label(breakdown.overall_rate);
    let excluded = format!("{} rows without a known port excluded", breakdown.excluded);

    let body = render_caption(PanelId::Port, area, buf);
    RateChart {
        title: captions::title(PanelId::Port),
        bars: &bars,
        reference: breakdown.overall_rate.map(|rate| (overall.as_str(), rate)),
        note: Some(&excluded),
    }
    .render(body, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{command::dashboard::tests::sample_store, ui::widgets::buffer_lines};

    #[test]
    fn test_port_legend_and_excluded_count_fit() {
        let store = sample_store();
        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);
        render_port(&store, area, &mut buf);

        let lines = buffer_lines(&buf);
        let legend = lines
            .iter()
            .position(|l| l.contains("Overall average survival rate: 52.17%"))
            .unwrap();
        assert!(lines[legend + 1].contains("1 rows without a known port excluded"));
    }

    #[test]
    fn test_class_legend() {
        let store = sample_store();
        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);
        render_class(&store, area, &mut buf);

        let text = buffer_lines(&buf).join("\n");
        assert!(text.contains("Overall average survival rate: 52.17%"));
        assert!(!text.contains("without a known port"));
    }
}
