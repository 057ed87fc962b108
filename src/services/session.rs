//! Session shell owning the current plan snapshot
//!
//! The presentation layer talks to the engine exclusively through this
//! type: one inbound event per edit, processed to completion, followed by a
//! fresh overview. Events are applied against the most recent snapshot, so
//! the last accepted mutation always wins.

use crate::config::settings::Settings;
use crate::models::AllocationPlan;

use super::edit::{set_budget, set_category_percent, set_currency};
use super::overview::{derive_overview, PlanOverview};

/// Holds the current allocation plan and applies boundary events to it
#[derive(Debug, Clone)]
pub struct PlanSession {
    plan: AllocationPlan,
}

impl PlanSession {
    /// Start a session from the fixed preset
    pub fn new() -> Self {
        Self {
            plan: AllocationPlan::initialize(),
        }
    }

    /// Start a session from the preset, seeded with the user's configured
    /// default budget and currency
    pub fn from_settings(settings: &Settings) -> Self {
        let mut plan = AllocationPlan::initialize();
        plan.budget = settings.default_budget.max(0.0);
        plan.currency = settings.currency;
        Self { plan }
    }

    /// Start a session from an explicit plan snapshot
    pub fn with_plan(plan: AllocationPlan) -> Self {
        Self { plan }
    }

    /// The current snapshot
    pub fn plan(&self) -> &AllocationPlan {
        &self.plan
    }

    /// Recompute the view model from the current snapshot
    pub fn overview(&self) -> PlanOverview {
        derive_overview(&self.plan)
    }

    /// A percent field was edited; `None` means the field was left empty
    pub fn on_percent_edited(&mut self, key: &str, value: Option<f64>) {
        self.plan = set_category_percent(&self.plan, key, value);
    }

    /// The budget field was edited; `None` means the field was cleared
    pub fn on_budget_edited(&mut self, value: Option<f64>) {
        self.plan = set_budget(&self.plan, value);
    }

    /// A currency was selected
    pub fn on_currency_changed(&mut self, code: &str) {
        self.plan = set_currency(&self.plan, code);
    }

    /// Restore the preset category table (budget and currency retained)
    pub fn on_reset_requested(&mut self) {
        self.plan = self.plan.reset();
    }
}

impl Default for PlanSession {
    fn default() -> Self {
        Self::new()
    }
}
