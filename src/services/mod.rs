//! Business logic layer
//!
//! `edit` is the mutation protocol (the only permitted writes), `overview`
//! is the pure derivation from plan to view model, and `session` is the
//! shell that owns the current snapshot and maps boundary events onto both.

pub mod edit;
pub mod overview;
pub mod session;

pub use edit::{set_budget, set_category_percent, set_currency};
pub use overview::{derive_overview, CategoryLine, GroupSummary, PlanOverview, BALANCE_EPSILON};
pub use session::PlanSession;
