use anyhow::Result;
use clap::{Parser, Subcommand};

use apportion_cli::cli::{
    handle_categories_command, handle_export_command, handle_plan_command, ExportArgs, PlanArgs,
};
use apportion_cli::config::{paths::ApportionPaths, settings::Settings};
use apportion_cli::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "apportion",
    version,
    about = "Terminal-based percentage budget allocation planner",
    long_about = "apportion-cli splits a total budget across a fixed set of \
                  spending categories by percentage. Amounts per category and \
                  per group are recomputed on every edit, and the plan is \
                  flagged whenever the percentages do not sum to 100."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Compute and print an allocation plan
    Plan(PlanArgs),

    /// List the preset categories and their groups
    Categories,

    /// Export a computed plan as JSON, YAML or CSV
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ApportionPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            run_tui(&settings)?;
        }
        Some(Commands::Plan(args)) => {
            handle_plan_command(&settings, &args)?;
        }
        Some(Commands::Categories) => {
            handle_categories_command()?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&settings, &args)?;
        }
        Some(Commands::Config) => {
            println!("apportion-cli Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:       {}", settings.currency.code());
            println!("  Default budget: {}", settings.default_budget);
        }
        None => {
            println!("apportion - percentage budget allocation planner");
            println!();
            println!("Run 'apportion --help' for usage information.");
            println!("Run 'apportion tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
