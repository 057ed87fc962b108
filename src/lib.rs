//! apportion-cli - Terminal-based percentage budget allocation planner
//!
//! This library provides the core functionality for apportion-cli: enter a
//! total budget, split it across a fixed set of categories via percentages,
//! and see per-category and per-group amounts recomputed on every edit.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (groups, currencies, categories, the plan)
//! - `services`: Mutation protocol, derivation engine, session shell
//! - `display`: Plain-text formatting for CLI output
//! - `export`: JSON/YAML/CSV export of the derived plan
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use apportion_cli::services::PlanSession;
//!
//! let mut session = PlanSession::new();
//! session.on_budget_edited(Some(200_000.0));
//! session.on_percent_edited("rent", Some(40.0));
//!
//! let overview = session.overview();
//! assert!(!overview.is_balanced);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod tui;

pub use error::ApportionError;
