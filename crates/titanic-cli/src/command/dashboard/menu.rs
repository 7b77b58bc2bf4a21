/// Every panel the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PanelId {
    Overview,
    Sex,
    Age,
    Class,
    Port,
    Correlation,
    Prediction,
    Search,
}

impl PanelId {
    pub(crate) const ALL: [Self; 8] = [
        Self::Overview,
        Self::Sex,
        Self::Age,
        Self::Class,
        Self::Port,
        Self::Correlation,
        Self::Prediction,
        Self::Search,
    ];

    /// Short identifier, e.g. `age`.
    pub(crate) fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Sex => "sex",
            Self::Age => "age",
            Self::Class => "class",
            Self::Port => "port",
            Self::Correlation => "correlation",
            Self::Prediction => "prediction",
            Self::Search => "search",
        }
    }

    /// Menu label.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Overview => "Data overview",
            Self::Sex => "Survival by sex",
            Self::Age => "Age distribution",
            Self::Class => "Survival by class",
            Self::Port => "Survival by port",
            Self::Correlation => "Correlation heatmap",
            Self::Prediction => "Predict survival",
            Self::Search => "Search by name",
        }
    }

    /// Looks up a panel by menu label or short identifier, ignoring ASCII case.
    pub(crate) fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|panel| {
            panel.label().eq_ignore_ascii_case(label) || panel.id().eq_ignore_ascii_case(label)
        })
    }
}

/// Which set of entries the sidebar menu offers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum MenuVariant {
    /// All eight panels
    #[default]
    Full,
    /// The five analysis panels plus search
    Basic,
}

impl MenuVariant {
    pub(crate) fn entries(self) -> &'static [PanelId] {
        const BASIC: [PanelId; 6] = [
            PanelId::Overview,
            PanelId::Sex,
            PanelId::Age,
            PanelId::Class,
            PanelId::Port,
            PanelId::Search,
        ];
        match self {
            Self::Full => &PanelId::ALL,
            Self::Basic => &BASIC,
        }
    }
}

/// Single-select menu state.
///
/// At most one entry is selected; with no selection no panel is shown.
#[derive(Debug, Clone)]
pub(crate) struct Menu {
    entries: &'static [PanelId],
    selected: Option<usize>,
}

impl Menu {
    /// Creates a menu with the first entry selected.
    pub(crate) fn new(variant: MenuVariant) -> Self {
        let entries = variant.entries();
        Self {
            entries,
            selected: (!entries.is_empty()).then_some(0),
        }
    }

    pub(crate) fn entries(&self) -> &'static [PanelId] {
        self.entries
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The panel to render, if any.
    pub(crate) fn current(&self) -> Option<PanelId> {
        self.entries.get(self.selected?).copied()
    }

    /// Selects the entry with the given label.
    ///
    /// A label that names no entry of this menu clears the selection.
    pub(crate) fn select_label(&mut self, label: &str) {
        self.selected = PanelId::from_label(label)
            .and_then(|panel| self.entries.iter().position(|p| *p == panel));
    }

    /// Selects the entry at `index`; out-of-range indices are ignored.
    pub(crate) fn select_index(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub(crate) fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % self.entries.len()));
    }

    pub(crate) fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        self.selected = Some(self.selected.map_or(last, |i| i.checked_sub(1).unwrap_or(last)));
    }
}
