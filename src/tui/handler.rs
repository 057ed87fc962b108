//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state: dialogs first, then the active input mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => match key.code {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => {
                app.active_dialog = ActiveDialog::None;
            }
            _ => {}
        },
        ActiveDialog::ConfirmReset => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.confirm_reset();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.active_dialog = ActiveDialog::None;
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('?') => app.active_dialog = ActiveDialog::Help,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            app.status_message = None;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            app.status_message = None;
        }
        KeyCode::Char('g') => app.selected_index = 0,
        KeyCode::Char('G') => app.selected_index = app.category_count().saturating_sub(1),

        // Edits
        KeyCode::Char('e') | KeyCode::Enter => app.begin_percent_edit(),
        KeyCode::Char('b') => app.begin_budget_edit(),
        KeyCode::Char('c') => app.cycle_currency(),
        KeyCode::Char('r') => app.request_reset(),

        _ => {}
    }
    Ok(())
}

/// Handle keys while editing a numeric field.
///
/// Only digits and a decimal point reach the input, the same restriction
/// the original number fields apply at the keyboard boundary.
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => app.input.insert(c),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(&Settings::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_edit_percent_via_keys() {
        let mut app = App::new(&Settings::default());

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input_mode, InputMode::Editing);

        // Replace "35" with "40"
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.plan().category("rent").unwrap().percent, 40.0);
    }

    #[test]
    fn test_editing_rejects_letters() {
        let mut app = App::new(&Settings::default());

        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.input.value().contains('x'));
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut app = App::new(&Settings::default());

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.plan().category("rent").unwrap().percent, 35.0);
    }

    #[test]
    fn test_reset_confirmation_flow() {
        let mut app = App::new(&Settings::default());
        app.session.on_percent_edited("rent", Some(90.0));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmReset);

        // Declining leaves the edit in place
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.plan().category("rent").unwrap().percent, 90.0);

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.session.plan().category("rent").unwrap().percent, 35.0);
    }

    #[test]
    fn test_help_toggles() {
        let mut app = App::new(&Settings::default());

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }
}
