//! CSV export functionality
//!
//! Exports the category lines and group totals in a spreadsheet-friendly
//! layout. Amounts are written as plain whole units without separators so
//! spreadsheets parse them as numbers.

use std::io::Write;

use crate::error::{ApportionError, ApportionResult};
use crate::services::PlanOverview;

/// Write the derived plan as CSV
pub fn export_plan_csv<W: Write>(overview: &PlanOverview, writer: &mut W) -> ApportionResult<()> {
    writeln!(writer, "Key,Name,Group,Percent,Amount").map_err(export_err)?;

    for line in &overview.lines {
        writeln!(
            writer,
            "{},{},{},{},{}",
            line.key,
            line.name,
            line.group.name(),
            line.percent,
            line.amount.units()
        )
        .map_err(export_err)?;
    }

    writeln!(writer).map_err(export_err)?;
    writeln!(writer, "Group,Percent Total,Amount Total").map_err(export_err)?;

    for summary in &overview.groups {
        writeln!(
            writer,
            "{},{},{}",
            summary.group.name(),
            summary.percent_total,
            summary.amount_total.units()
        )
        .map_err(export_err)?;
    }

    writeln!(writer).map_err(export_err)?;
    writeln!(
        writer,
        "Total,{},{}",
        overview.all_percent_total,
        overview.total_amount().units()
    )
    .map_err(export_err)?;

    Ok(())
}

fn export_err(e: std::io::Error) -> ApportionError {
    ApportionError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AllocationPlan;
    use crate::services::derive_overview;

    #[test]
    fn test_csv_export_layout() {
        let overview = derive_overview(&AllocationPlan::initialize());
        let mut buffer = Vec::new();
        export_plan_csv(&overview, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Key,Name,Group,Percent,Amount");
        assert_eq!(lines[1], "rent,Rent,Needs,35,35000");
        assert!(output.contains("Group,Percent Total,Amount Total"));
        assert!(output.contains("Needs,73,73000"));
        assert!(output.contains("Total,100,100000"));
    }
}
