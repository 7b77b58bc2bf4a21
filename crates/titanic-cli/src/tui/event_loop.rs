use std::io;

use crossterm::event::{self, Event};

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// There is no tick: the loop blocks on terminal input and asks for a
/// render only after an event that may have changed what is on screen.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub fn new() -> Self {
        Self {
            dirty: true, // Initial render is required on startup
        }
    }

    /// Returns the next event, blocking on the terminal when nothing is pending.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        self.next_with(event::read)
    }

    fn next_with<F>(&mut self, read: F) -> io::Result<TuiEvent>
    where
        F: FnOnce() -> io::Result<Event>,
    {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = read()?;
        self.dirty = affects_view(&event);
        Ok(event.into())
    }
}

fn affects_view(event: &Event) -> bool {
    !matches!(event, Event::FocusGained | Event::FocusLost | Event::Mouse(_))
}
