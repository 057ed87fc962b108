//! Terminal output formatting
//!
//! Plain-text renderings of the derived view model for CLI commands.

pub mod plan;

pub use plan::{format_category_tree, format_percent, format_plan_summary, format_plan_table};
