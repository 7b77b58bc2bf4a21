use crossterm::event::Event;
use ratatui::Frame;

/// A screen driven by [`Tui::run`](crate::tui::Tui::run).
pub trait App {
    fn should_exit(&self) -> bool;

    /// Reacts to one terminal event. Key releases and repeats are delivered too.
    fn handle_event(&mut self, event: &Event);

    /// Draws the whole screen from current state.
    fn draw(&self, frame: &mut Frame);
}
