use titanic_analysis::predictor::DEFAULT_MAX_ITER;
use titanic_data::DataStore;

use self::{app::DashboardApp, menu::MenuVariant};
use crate::tui::Tui;

mod app;
pub(crate) mod captions;
mod menu;
mod panels;
mod sidebar;

/// Number of rows shown in each overview preview.
const DEFAULT_PREVIEW_ROWS: usize = 10;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DashboardArg {
    /// Which menu entries to offer
    #[arg(long, value_enum, default_value_t = MenuVariant::Full)]
    menu: MenuVariant,
    /// Panel to show on startup, by menu label or short name (e.g. `age`)
    #[arg(long)]
    panel: Option<String>,
    /// Rows shown in each data overview preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview_rows: usize,
    /// Iteration cap for the survival prediction model
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,
}

impl Default for DashboardArg {
    fn default() -> Self {
        Self {
            menu: MenuVariant::Full,
            panel: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

pub(crate) fn run(arg: &DashboardArg, store: DataStore) -> anyhow::Result<()> {
    tracing::info!(
        train = store.train().len(),
        test = store.test().len(),
        submission = store.submission().len(),
        menu = ?arg.menu,
        "starting dashboard"
    );
    let mut app = DashboardApp::new(store, arg);
    Tui::new().run(&mut app)?;
    Ok(())
}
