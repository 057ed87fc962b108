//! Terminal User Interface module
//!
//! This module provides the interactive interface using ratatui: a summary
//! panel, the category table, and inline numeric editing for percents and
//! the budget.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
