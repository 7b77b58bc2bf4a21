use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// Drives an [`App`] on the alternate screen until it asks to exit.
///
/// Frames are drawn only after input that may have changed the view.
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
    frames: u64,
}

impl Tui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `app`, restoring the terminal on return.
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| -> anyhow::Result<()> {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                        self.frames += 1;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&event),
                }
            }
            Ok(())
        })?;
        tracing::debug!(frames = self.frames, "terminal restored");
        Ok(())
    }
}
