//! TUI views module
//!
//! Contains the summary panel, the category table and the status bar.

pub mod allocation;
pub mod status_bar;
pub mod summary;

use ratatui::style::Color;
use ratatui::Frame;

use crate::models::Group;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Fixed display color per group
pub fn group_color(group: Group) -> Color {
    match group {
        Group::Needs => Color::Green,
        Group::Wants => Color::Blue,
        Group::Investments => Color::Yellow,
    }
}

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    summary::render(frame, app, layout.summary);
    allocation::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmReset => {
            dialogs::confirm::render(frame, "Reset all percents to the preset?")
        }
        ActiveDialog::None => {}
    }
}
