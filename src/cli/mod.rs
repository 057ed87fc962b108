//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod categories;
pub mod export;
pub mod plan;

pub use categories::handle_categories_command;
pub use export::{handle_export_command, ExportArgs};
pub use plan::{handle_plan_command, PlanArgs};
