use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal passenger tier, 1 (highest) to 3 (lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CabinClass {
    First,
    Second,
    Third,
}

impl CabinClass {
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

impl From<CabinClass> for u8 {
    fn from(class: CabinClass) -> Self {
        class.number()
    }
}

impl TryFrom<u8> for CabinClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            _ => Err(format!("cabin class must be 1, 2 or 3 (got {value})")),
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One of the three boarding locations, keyed by a single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Port {
    Cherbourg,
    Queenstown,
    Southampton,
}

impl Port {
    /// All ports in code order (`C`, `Q`, `S`).
    pub const ALL: [Self; 3] = [Self::Cherbourg, Self::Queenstown, Self::Southampton];

    /// Looks up a port by its embarkation code.
    ///
    /// Returns `None` for anything outside the fixed `C`/`Q`/`S` table.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|port| port.code() == code)
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Cherbourg => "C",
            Self::Queenstown => "Q",
            Self::Southampton => "S",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Cherbourg => "Cherbourg",
            Self::Queenstown => "Queenstown",
            Self::Southampton => "Southampton",
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single passenger row from the training or test table.
///
/// `survived` is `Some` for every training row and `None` for every test row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passenger {
    pub passenger_id: u32,
    pub survived: Option<bool>,
    pub class: CabinClass,
    pub name: Option<String>,
    pub sex: Option<String>,
    pub age: Option<f64>,
    pub sib_sp: Option<u32>,
    pub parch: Option<u32>,
    pub ticket: Option<String>,
    pub fare: Option<f64>,
    pub cabin: Option<String>,
    /// Raw embarkation code, usually one of `C`, `Q` or `S`.
    pub embarked: Option<String>,
}

impl Passenger {
    /// Returns the embarkation port when the code is one of the known three.
    #[must_use]
    pub fn port(&self) -> Option<Port> {
        self.embarked.as_deref().and_then(Port::from_code)
    }

    /// Returns the survival indicator as `1.0` / `0.0`.
    #[must_use]
    pub fn survived_indicator(&self) -> Option<f64> {
        self.survived.map(|s| if s { 1.0 } else { 0.0 })
    }

    /// Case-insensitive substring match against the name.
    ///
    /// Missing or empty names never match. `needle_lower` must already be lowercase.
    #[must_use]
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_lowercase().contains(needle_lower),
            _ => false,
        }
    }
}
