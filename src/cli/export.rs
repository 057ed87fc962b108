//! Export CLI command
//!
//! Computes a plan like the plan command, then writes it to a file or
//! stdout in the requested format.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{ApportionError, ApportionResult};
use crate::export::{export_plan_csv, export_plan_json, export_plan_yaml};
use crate::services::derive_overview;

use super::plan::{build_plan, PlanArgs};

/// Arguments for the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Output format: json, yaml or csv
    #[arg(short, long, default_value = "json")]
    pub format: String,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: &ExportArgs) -> ApportionResult<()> {
    let plan = build_plan(settings, &args.plan)?;
    let overview = derive_overview(&plan);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|e| ApportionError::Export(format!("Failed to create {}: {}", path.display(), e)))?,
        ),
        None => Box::new(io::stdout()),
    };

    match args.format.to_ascii_lowercase().as_str() {
        "json" => export_plan_json(&overview, &mut writer)?,
        "yaml" => export_plan_yaml(&overview, &mut writer)?,
        "csv" => export_plan_csv(&overview, &mut writer)?,
        other => {
            return Err(ApportionError::Validation(format!(
                "Unknown export format '{}' (expected json, yaml or csv)",
                other
            )))
        }
    }

    if let Some(path) = &args.output {
        println!("Exported plan to {}", path.display());
    }

    Ok(())
}
