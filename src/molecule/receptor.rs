//! Receptors the liver lobule model knows how to respond to.

use serde::{Deserialize, Serialize};

/// Receptor with a defined dose response.
///
/// Anything that does not resolve to one of these is a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownReceptor {
    /// TGF-beta receptor II on hepatic stellate cells
    Tgfbr2,
    /// Epidermal growth factor receptor on hepatocytes
    Egfr,
}

impl KnownReceptor {
    pub const ALL: [KnownReceptor; 2] = [KnownReceptor::Tgfbr2, KnownReceptor::Egfr];

    /// Resolve a receptor name, ignoring case and surrounding whitespace
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            KnownReceptor::Tgfbr2 => "TGFBR2",
            KnownReceptor::Egfr => "EGFR",
        }
    }

    /// Cell population expressing this receptor
    pub fn cell_type(self) -> &'static str {
        match self {
            KnownReceptor::Tgfbr2 => "hepatic stellate cell",
            KnownReceptor::Egfr => "hepatocyte",
        }
    }
}

impl std::fmt::Display for KnownReceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
