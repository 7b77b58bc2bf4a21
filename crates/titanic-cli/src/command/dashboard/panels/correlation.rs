use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use titanic_analysis::correlation::CorrelationMatrix;
use titanic_data::DataStore;

use crate::{
    command::dashboard::{captions, menu::PanelId, panels::render_caption},
    ui::widgets::Heatmap,
};

pub(crate) fn render_correlation(store: &DataStore, area: Rect, buf: &mut Buffer) {
    // Label encoders are fit here, on every render, and discarded afterwards.
    let matrix = CorrelationMatrix::from_passengers(store.train());
    let body = render_caption(PanelId::Correlation, area, buf);
    Heatmap {
        title: captions::title(PanelId::Correlation),
        matrix: &matrix,
    }
    .render(body, buf);
}
