//! YAML export functionality
//!
//! Human-readable variant of the same export document as the JSON format.

use std::io::Write;

use crate::error::{ApportionError, ApportionResult};
use crate::services::PlanOverview;

use super::json::PlanExport;

/// Write the derived plan as YAML
pub fn export_plan_yaml<W: Write>(overview: &PlanOverview, writer: &mut W) -> ApportionResult<()> {
    let export = PlanExport::from_overview(overview);
    serde_yaml::to_writer(writer, &export).map_err(|e| ApportionError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AllocationPlan;
    use crate::services::derive_overview;

    #[test]
    fn test_yaml_export_contains_rows() {
        let overview = derive_overview(&AllocationPlan::initialize());
        let mut buffer = Vec::new();
        export_plan_yaml(&overview, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("schema_version: 1.0.0"));
        assert!(output.contains("currency: RUB"));
        assert!(output.contains("key: rent"));
        assert!(output.contains("amount: 35000"));
    }
}
