use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Widget,
};
use titanic_analysis::summary::SurvivalSummary;
use titanic_data::DataStore;

use crate::{
    command::dashboard::{
        DashboardArg,
        menu::{Menu, PanelId},
        panels::{
            self, OverviewPanel, OverviewView, PredictionPanel, PredictionView, SearchPanel,
            SearchView,
        },
        sidebar::Sidebar,
    },
    tui::App,
    ui::widgets::style,
};

const SIDEBAR_WIDTH: u16 = 32;

/// Which half of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Menu,
    Panel,
}

#[derive(Debug)]
pub(crate) struct DashboardApp {
    store: DataStore,
    menu: Menu,
    focus: Focus,
    overview: OverviewPanel,
    prediction: PredictionPanel,
    search: SearchPanel,
    should_exit: bool,
}

impl DashboardApp {
    pub(crate) fn new(store: DataStore, arg: &DashboardArg) -> Self {
        let mut menu = Menu::new(arg.menu);
        if let Some(label) = &arg.panel {
            menu.select_label(label);
            if menu.current().is_none() {
                tracing::warn!(label, "no menu entry matches the requested panel");
            }
        }
        let mut app = Self {
            store,
            menu,
            focus: Focus::Menu,
            overview: OverviewPanel::new(arg.preview_rows),
            prediction: PredictionPanel::new(arg.max_iter),
            search: SearchPanel::default(),
            should_exit: false,
        };
        app.on_selection_changed();
        app
    }

    fn on_selection_changed(&mut self) {
        tracing::debug!(panel = ?self.menu.current(), "panel selected");
        if self.menu.current() == Some(PanelId::Prediction) {
            self.prediction.activate(&self.store);
        }
    }

    fn handle_menu_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu.select_previous();
                self.on_selection_changed();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu.select_next();
                self.on_selection_changed();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c
                    .to_digit(10)
                    .and_then(|d| usize::try_from(d).ok())
                    .map_or(0, |d| d - 1);
                if self.menu.select_index(index) {
                    self.on_selection_changed();
                }
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right if self.menu.current().is_some() => {
                self.focus = Focus::Panel;
            }
            _ => {}
        }
    }

    fn handle_panel_key(&mut self, key: &KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab) {
            self.focus = Focus::Menu;
            return;
        }
        match self.menu.current() {
            Some(PanelId::Overview) => self.overview.handle_key(key, &self.store),
            Some(PanelId::Prediction) => self.prediction.handle_key(key, &self.store),
            Some(PanelId::Search) => self.search.handle_key(key, &self.store),
            Some(_) | None => {}
        }
    }

    fn render_panel(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Panel;
        let store = &self.store;
        match self.menu.current() {
            Some(PanelId::Overview) => OverviewView {
                panel: &self.overview,
                store,
                focused,
            }
            .render(area, buf),
            Some(PanelId::Sex) => panels::render_sex(store, area, buf),
            Some(PanelId::Age) => panels::render_age(store, area, buf),
            Some(PanelId::Class) => panels::render_class(store, area, buf),
            Some(PanelId::Port) => panels::render_port(store, area, buf),
            Some(PanelId::Correlation) => panels::render_correlation(store, area, buf),
            Some(PanelId::Prediction) => PredictionView {
                panel: &self.prediction,
                focused,
            }
            .render(area, buf),
            Some(PanelId::Search) => SearchView {
                panel: &self.search,
                store,
                focused,
            }
            .render(area, buf),
            None => {}
        }
    }

    fn help_text(&self) -> &'static str {
        match (self.focus, self.menu.current()) {
            (Focus::Menu, _) => "↑/↓: Select | 1-8: Jump | Enter: Open panel | q: Quit",
            (Focus::Panel, Some(PanelId::Overview)) => {
                "←/→: Switch table | ↑/↓: Scroll | Esc: Back to menu"
            }
            (Focus::Panel, Some(PanelId::Prediction)) => {
                "↑/↓: Field | ←/→: Change | PgUp/PgDn: Age ±10 | Enter: Predict | Esc: Back"
            }
            (Focus::Panel, Some(PanelId::Search)) => {
                "Type a name | ↑/↓: Scroll | Esc: Back to menu"
            }
            (Focus::Panel, _) => "Esc: Back to menu | Ctrl-C: Quit",
        }
    }
}

impl App for DashboardApp {
    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_press_event() else {
            return;
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return;
        }
        match self.focus {
            Focus::Menu => self.handle_menu_key(&key),
            Focus::Panel => self.handle_panel_key(&key),
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        let [sidebar_area, content_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
                .areas(main_area);

        // Recomputed every frame from the training table.
        let summary = SurvivalSummary::from_passengers(self.store.train());
        frame.render_widget(
            Sidebar {
                summary: &summary,
                menu: &self.menu,
                focused: self.focus == Focus::Menu,
            },
            sidebar_area,
        );
        self.render_panel(content_area, frame.buffer_mut());
        frame.render_widget(Line::styled(self.help_text(), style::HELP), help_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        command::dashboard::{captions, menu::MenuVariant, tests::sample_store},
        ui::widgets::buffer_lines,
    };

    fn app_with(arg: &DashboardArg) -> DashboardApp {
        DashboardApp::new(sample_store(), arg)
    }

    fn press(app: &mut DashboardApp, code: KeyCode) {
        app.handle_event(&Event::Key(KeyEvent::from(code)));
    }

    fn draw_lines(app: &DashboardApp) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn screen(app: &DashboardApp) -> String {
        draw_lines(app).join("\n")
    }

    /// Text right of the sidebar, above the help line.
    fn content(app: &DashboardApp) -> String {
        let lines = draw_lines(app);
        lines[..lines.len() - 1]
            .iter()
            .map(|line| line.chars().skip(usize::from(SIDEBAR_WIDTH)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_starts_on_overview() {
        let app = app_with(&DashboardArg::default());
        assert_eq!(app.menu.current(), Some(PanelId::Overview));
        let text = screen(&app);
        assert!(text.contains("Passengers:    23"));
        assert!(text.contains("Survivors:     12"));
        assert!(text.contains("Survival rate: 52.17%"));
        assert!(text.contains("Training data preview"));
    }

    #[test]
    fn test_initial_panel_by_label() {
        let arg = DashboardArg {
            panel: Some("Correlation heatmap".to_owned()),
            ..DashboardArg::default()
        };
        let app = app_with(&arg);
        assert_eq!(app.menu.current(), Some(PanelId::Correlation));
        assert!(screen(&app).contains("Correlation between key features"));
    }

    #[test]
    fn test_unrecognized_panel_renders_nothing() {
        let arg = DashboardArg {
            panel: Some("Lifeboat roster".to_owned()),
            ..DashboardArg::default()
        };
        let app = app_with(&arg);
        assert_eq!(app.menu.current(), None);
        assert!(content(&app).chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn test_basic_menu_has_no_prediction() {
        let arg = DashboardArg {
            menu: MenuVariant::Basic,
            ..DashboardArg::default()
        };
        let mut app = app_with(&arg);
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.menu.current(), Some(PanelId::Overview));
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.menu.current(), Some(PanelId::Search));
    }

    #[test]
    fn test_selecting_prediction_activates_form() {
        let mut app = app_with(&DashboardArg::default());
        assert!(app.prediction.phase().is_idle());
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.menu.current(), Some(PanelId::Prediction));
        assert!(app.prediction.phase().is_collecting_input());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Panel);
        press(&mut app, KeyCode::Enter);
        assert!(app.prediction.phase().is_showing_result());
        assert!(screen(&app).contains("Predicted survival probability:"));
    }

    #[test]
    fn test_search_typing_does_not_quit() {
        let mut app = app_with(&DashboardArg::default());
        press(&mut app, KeyCode::Char('8'));
        press(&mut app, KeyCode::Enter);
        for c in "quit".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(!app.should_exit());
        assert_eq!(app.search.query(), "quit");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Menu);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_exit());
    }

    #[test]
    fn test_ctrl_c_quits_from_panel() {
        let mut app = app_with(&DashboardArg::default());
        press(&mut app, KeyCode::Enter);
        app.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_exit());
    }

    #[test]
    fn test_every_panel_draws() {
        let mut app = app_with(&DashboardArg::default());
        for (i, panel) in PanelId::ALL.into_iter().enumerate() {
            assert!(app.menu.select_index(i));
            app.on_selection_changed();
            let expected = match panel {
                PanelId::Overview => captions::OVERVIEW_TRAIN,
                _ => captions::title(panel),
            };
            assert!(content(&app).contains(expected), "{panel:?} title missing");
        }
    }
}
