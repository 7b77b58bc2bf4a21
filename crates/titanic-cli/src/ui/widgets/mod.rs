pub use self::{data_table::*, gradient::*, heatmap::*, rate_chart::*};

mod data_table;
mod gradient;
mod heatmap;
mod rate_chart;

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    pub const TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    pub const HELP: Style = Style::new().fg(Color::DarkGray);
    pub const CAPTION: Style = Style::new().fg(Color::Gray);
    pub const FOCUSED_BORDER: Style = Style::new().fg(Color::Yellow);
    pub const HIGHLIGHT: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    pub const SUCCESS: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
    pub const WARNING: Style = Style::new().fg(Color::Yellow);
    pub const GAUGE: Style = Style::new().fg(Color::LightBlue).bg(Color::DarkGray);
    pub const ERROR: Style = Style::new().fg(Color::Red);
}

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect()
        })
        .collect()
}
