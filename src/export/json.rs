//! JSON export functionality
//!
//! Exports the derived plan to JSON with schema versioning, in the same
//! document shape the other formats share.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{ApportionError, ApportionResult};
use crate::models::Currency;
use crate::services::{CategoryLine, GroupSummary, PlanOverview};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported snapshot of a derived plan
#[derive(Debug, Clone, Serialize)]
pub struct PlanExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Budget the plan was derived from
    pub budget: f64,

    /// Display currency
    pub currency: Currency,

    /// Sum of all category percents
    pub all_percent_total: f64,

    /// Whether the percents add up to 100
    pub is_balanced: bool,

    /// Per-category lines in display order
    pub categories: Vec<CategoryLine>,

    /// Per-group totals
    pub groups: Vec<GroupSummary>,
}

impl PlanExport {
    /// Build an export document from a derived overview
    pub fn from_overview(overview: &PlanOverview) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budget: overview.budget,
            currency: overview.currency,
            all_percent_total: overview.all_percent_total,
            is_balanced: overview.is_balanced,
            categories: overview.lines.clone(),
            groups: overview.groups.clone(),
        }
    }
}

/// Write the derived plan as pretty-printed JSON
pub fn export_plan_json<W: Write>(overview: &PlanOverview, writer: &mut W) -> ApportionResult<()> {
    let export = PlanExport::from_overview(overview);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ApportionError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ApportionError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AllocationPlan;
    use crate::services::derive_overview;

    #[test]
    fn test_json_export_round_trips_through_value() {
        let overview = derive_overview(&AllocationPlan::initialize());
        let mut buffer = Vec::new();
        export_plan_json(&overview, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["currency"], "RUB");
        assert_eq!(value["budget"], 100_000.0);
        assert_eq!(value["is_balanced"], true);
        assert_eq!(value["categories"].as_array().unwrap().len(), 12);
        assert_eq!(value["categories"][0]["key"], "rent");
        assert_eq!(value["categories"][0]["amount"], 35_000);
        assert_eq!(value["groups"][0]["group"], "Needs");
        assert_eq!(value["groups"][0]["amount_total"], 73_000);
    }
}
