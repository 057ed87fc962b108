//! Spending group taxonomy
//!
//! Every category belongs to exactly one of three fixed groups. The set is
//! closed: groups are never created or removed at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fixed spending groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    /// Essential spending (rent, groceries, utilities, ...)
    Needs,
    /// Discretionary spending (shopping, entertainment, travel)
    Wants,
    /// Money set aside (investments, reserve fund)
    Investments,
}

impl Group {
    /// All groups in display order
    pub fn all() -> &'static [Self] {
        &[Self::Needs, Self::Wants, Self::Investments]
    }

    /// Display name for this group
    pub fn name(&self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::Investments => "Investments",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
