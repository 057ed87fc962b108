//! Allocation plan model
//!
//! The single source of truth for the session: the ordered category list,
//! the budget, and the display currency. Every mutation produces a brand-new
//! snapshot, so observers always see a complete, consistent model.

use serde::{Deserialize, Serialize};

use super::category::{preset_categories, Category};
use super::currency::Currency;

/// Default budget for a fresh plan
pub const DEFAULT_BUDGET: f64 = 100_000.0;

/// The current allocation state: categories, budget, currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    /// Categories in display order; order is preserved across mutations
    pub categories: Vec<Category>,

    /// Total budget in whole currency units (non-negative)
    pub budget: f64,

    /// Display currency
    pub currency: Currency,
}

impl AllocationPlan {
    /// The fixed preset snapshot: 12 categories, default budget, RUB
    pub fn initialize() -> Self {
        Self {
            categories: preset_categories(),
            budget: DEFAULT_BUDGET,
            currency: Currency::default(),
        }
    }

    /// Restore the preset category table.
    ///
    /// Budget and currency are retained; only the category percents revert.
    pub fn reset(&self) -> Self {
        Self {
            categories: preset_categories(),
            budget: self.budget,
            currency: self.currency,
        }
    }

    /// Look up a category by key
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }
}

impl Default for AllocationPlan {
    fn default() -> Self {
        Self::initialize()
    }
}
