//! Plan CLI command
//!
//! One-shot plan computation: seed a session from settings, apply the
//! command-line overrides, derive the overview, and print it.

use std::str::FromStr;

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_plan_summary, format_plan_table};
use crate::error::{ApportionError, ApportionResult};
use crate::models::{AllocationPlan, Currency};
use crate::services::{derive_overview, set_budget, set_category_percent, PlanSession};

/// Arguments shared by the plan and export commands
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Total budget to allocate
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// Display currency code (RUB, USD, EUR)
    #[arg(short, long)]
    pub currency: Option<String>,

    /// Override a category percent, e.g. --set rent=40 (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=PERCENT")]
    pub set: Vec<String>,
}

/// Parse a single `key=percent` override
pub fn parse_set_override(raw: &str) -> ApportionResult<(String, f64)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        ApportionError::Validation(format!(
            "Invalid override '{}': expected KEY=PERCENT",
            raw
        ))
    })?;

    let percent: f64 = value.trim().parse().map_err(|_| {
        ApportionError::Validation(format!("Invalid percent value '{}' for '{}'", value, key))
    })?;

    Ok((key.trim().to_string(), percent))
}

/// Build the plan for a one-shot command.
///
/// Unknown category keys and currency codes are rejected here, at the CLI
/// boundary; the engine's silent no-op rules are reserved for interactive
/// editing. Percent overrides are clamped to 0-100 like any other input
/// boundary.
pub fn build_plan(settings: &Settings, args: &PlanArgs) -> ApportionResult<AllocationPlan> {
    let mut plan = PlanSession::from_settings(settings).plan().clone();

    if let Some(budget) = args.budget {
        plan = set_budget(&plan, Some(budget));
    }

    if let Some(ref code) = args.currency {
        let currency =
            Currency::from_str(code).map_err(|_| ApportionError::unknown_currency(code))?;
        plan.currency = currency;
    }

    for raw in &args.set {
        let (key, percent) = parse_set_override(raw)?;
        if plan.category(&key).is_none() {
            return Err(ApportionError::unknown_category(key));
        }
        plan = set_category_percent(&plan, &key, Some(percent.clamp(0.0, 100.0)));
    }

    Ok(plan)
}

/// Handle the plan command
pub fn handle_plan_command(settings: &Settings, args: &PlanArgs) -> ApportionResult<()> {
    let plan = build_plan(settings, args)?;
    let overview = derive_overview(&plan);

    println!("{}", format_plan_table(&overview));
    println!();
    print!("{}", format_plan_summary(&overview));

    Ok(())
}
