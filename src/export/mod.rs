//! Export module for apportion-cli
//!
//! Writes the derived plan in multiple formats:
//! - CSV: spreadsheet-compatible rows and totals
//! - JSON: machine-readable export with schema versioning
//! - YAML: human-readable variant of the same document

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_plan_csv;
pub use json::{export_plan_json, PlanExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_plan_yaml;
