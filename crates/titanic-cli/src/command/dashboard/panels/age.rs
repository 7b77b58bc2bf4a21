use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, merge::MergeStrategy},
    text::Line,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};
use titanic_analysis::age::AgeDistribution;
use titanic_data::DataStore;

use crate::{
    command::dashboard::{captions, menu::PanelId, panels::render_caption},
    ui::widgets::style,
};

const HISTOGRAM_COLOR: Color = Color::Rgb(135, 206, 235);
const DENSITY_COLOR: Color = Color::Rgb(30, 90, 160);

/// Histogram of known ages with the scaled density curve drawn over it.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn render_age(store: &DataStore, area: Rect, buf: &mut Buffer) {
    let dist = AgeDistribution::from_passengers(store.train());

    let body = render_caption(PanelId::Age, area, buf);
    let block = Block::bordered()
        .merge_borders(MergeStrategy::Exact)
        .title(Line::styled(captions::title(PanelId::Age), style::TITLE));
    let inner = block.inner(body);
    block.render(body, buf);
    let [stats_area, chart_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);

    let age = |value: Option<f64>| value.map_or_else(|| "-".to_owned(), |m| format!("{m:.1}"));
    Line::raw(format!(
        " Mean age: {} | Median age: {} | {} rows without age excluded",
        age(dist.mean),
        age(dist.median),
        dist.excluded
    ))
    .render(stats_area, buf);

    let (Some(first), Some(last)) = (dist.bins.first(), dist.bins.last()) else {
        return;
    };
    let x_bounds = [first.start, last.end];

    let bars = dist
        .bins
        .iter()
        .map(|bin| (f64::midpoint(bin.start, bin.end), bin.count as f64))
        .collect::<Vec<_>>();
    let density_peak = dist.density.iter().map(|(_, d)| *d).fold(0.0, f64::max);
    let y_max = (dist.max_count() as f64).max(density_peak).max(1.0) * 1.1;

    let datasets = vec![
        Dataset::default()
            .name("count")
            .marker(Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::new().fg(HISTOGRAM_COLOR))
            .data(&bars),
        Dataset::default()
            .name("density")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::new().fg(DENSITY_COLOR))
            .data(&dist.density),
    ];
    let x_axis = Axis::default()
        .title("Age")
        .bounds(x_bounds)
        .labels([
            format!("{:.0}", x_bounds[0]),
            format!("{:.0}", f64::midpoint(x_bounds[0], x_bounds[1])),
            format!("{:.0}", x_bounds[1]),
        ]);
    let y_axis = Axis::default()
        .title("Passengers")
        .bounds([0.0, y_max])
        .labels([
            "0".to_owned(),
            format!("{:.0}", y_max / 2.0),
            format!("{y_max:.0}"),
        ]);
    Chart::new(datasets)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .render(chart_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{command::dashboard::tests::sample_store, ui::widgets::buffer_lines};

    #[test]
    fn test_stats_line_shows_mean_and_median() {
        let store = sample_store();
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        render_age(&store, area, &mut buf);
        let text = buffer_lines(&buf).join("\n");
        assert!(text.contains("Mean age: "));
        assert!(text.contains("Median age: "));
        assert!(!text.contains("Median age: -"));
    }
}
