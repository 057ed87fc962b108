//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Plan state itself lives in the session; the app only tracks presentation
//! concerns (selection, input mode, dialogs, status line).

use crate::config::settings::Settings;
use crate::display::format_percent;
use crate::services::PlanSession;

use super::widgets::TextInput;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// What the active edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Percent of the selected category
    Percent,
    /// The total budget
    Budget,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmReset,
}

/// Main application state
pub struct App {
    /// The session owning the current plan snapshot
    pub session: PlanSession,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Selected category index (in plan display order)
    pub selected_index: usize,

    /// Current input mode
    pub input_mode: InputMode,

    /// Target of the active edit, if editing
    pub edit_target: Option<EditTarget>,

    /// Numeric input field for the active edit
    pub input: TextInput,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance seeded from settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            session: PlanSession::from_settings(settings),
            should_quit: false,
            selected_index: 0,
            input_mode: InputMode::default(),
            edit_target: None,
            input: TextInput::new(),
            active_dialog: ActiveDialog::default(),
            status_message: None,
        }
    }

    /// Signal the main loop to exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Number of categories in the plan
    pub fn category_count(&self) -> usize {
        self.session.plan().categories.len()
    }

    /// Key of the currently selected category
    pub fn selected_key(&self) -> Option<String> {
        self.session
            .plan()
            .categories
            .get(self.selected_index)
            .map(|c| c.key.clone())
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.category_count() {
            self.selected_index += 1;
        }
    }

    /// Start editing the selected category's percent
    pub fn begin_percent_edit(&mut self) {
        let Some(category) = self.session.plan().categories.get(self.selected_index) else {
            return;
        };
        let label = format!("Percent for {}", category.name);
        let current = format_percent(category.percent);

        self.input = TextInput::new().label(label).content(current).focused(true);
        self.edit_target = Some(EditTarget::Percent);
        self.input_mode = InputMode::Editing;
        self.status_message = None;
    }

    /// Start editing the budget
    pub fn begin_budget_edit(&mut self) {
        let budget = self.session.plan().budget;
        let current = if budget == budget.trunc() {
            format!("{}", budget as i64)
        } else {
            format!("{:.2}", budget)
        };

        self.input = TextInput::new()
            .label("Budget")
            .content(current)
            .focused(true);
        self.edit_target = Some(EditTarget::Budget);
        self.input_mode = InputMode::Editing;
        self.status_message = None;
    }

    /// Abandon the active edit
    pub fn cancel_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.edit_target = None;
        self.input.clear();
    }

    /// Commit the active edit to the session.
    ///
    /// An empty or unparsable percent is submitted as `None` and ignored by
    /// the engine; an empty budget becomes zero. Percent values are clamped
    /// to 0-100 here, at the input boundary.
    pub fn commit_edit(&mut self) {
        let raw = self.input.value().trim().to_string();

        match self.edit_target {
            Some(EditTarget::Percent) => {
                let value = raw.parse::<f64>().ok().map(|v| v.clamp(0.0, 100.0));
                if let Some(key) = self.selected_key() {
                    self.session.on_percent_edited(&key, value);
                }
            }
            Some(EditTarget::Budget) => {
                let value = raw.parse::<f64>().ok();
                self.session.on_budget_edited(value);
            }
            None => {}
        }

        self.cancel_edit();
    }

    /// Switch to the next display currency
    pub fn cycle_currency(&mut self) {
        let next = self.session.plan().currency.next();
        self.session.on_currency_changed(next.code());
        self.status_message = Some(format!("Currency: {}", next.code()));
    }

    /// Ask for confirmation before resetting
    pub fn request_reset(&mut self) {
        self.active_dialog = ActiveDialog::ConfirmReset;
    }

    /// Restore the preset category table
    pub fn confirm_reset(&mut self) {
        self.session.on_reset_requested();
        self.active_dialog = ActiveDialog::None;
        self.selected_index = 0;
        self.status_message = Some("Preset percents restored".to_string());
    }

    /// Whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;

    #[test]
    fn test_selection_bounds() {
        let mut app = App::new(&Settings::default());

        app.move_up();
        assert_eq!(app.selected_index, 0);

        for _ in 0..50 {
            app.move_down();
        }
        assert_eq!(app.selected_index, app.category_count() - 1);
    }

    #[test]
    fn test_percent_edit_commit() {
        let mut app = App::new(&Settings::default());

        app.begin_percent_edit();
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.input.value(), "35");

        app.input.clear();
        for c in "40".chars() {
            app.input.insert(c);
        }
        app.commit_edit();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.plan().category("rent").unwrap().percent, 40.0);
    }

    #[test]
    fn test_empty_percent_commit_is_ignored() {
        let mut app = App::new(&Settings::default());

        app.begin_percent_edit();
        app.input.clear();
        app.commit_edit();

        assert_eq!(app.session.plan().category("rent").unwrap().percent, 35.0);
    }

    #[test]
    fn test_percent_commit_clamps_to_100() {
        let mut app = App::new(&Settings::default());

        app.begin_percent_edit();
        app.input.clear();
        for c in "250".chars() {
            app.input.insert(c);
        }
        app.commit_edit();

        assert_eq!(app.session.plan().category("rent").unwrap().percent, 100.0);
    }

    #[test]
    fn test_empty_budget_commit_becomes_zero() {
        let mut app = App::new(&Settings::default());

        app.begin_budget_edit();
        assert_eq!(app.input.value(), "100000");
        app.input.clear();
        app.commit_edit();

        assert_eq!(app.session.plan().budget, 0.0);
    }

    #[test]
    fn test_cycle_currency() {
        let mut app = App::new(&Settings::default());
        app.cycle_currency();
        assert_eq!(app.session.plan().currency, Currency::Usd);
        assert_eq!(app.status_message.as_deref(), Some("Currency: USD"));
    }

    #[test]
    fn test_reset_flow() {
        let mut app = App::new(&Settings::default());
        app.session.on_percent_edited("rent", Some(90.0));

        app.request_reset();
        assert!(app.has_dialog());

        app.confirm_reset();
        assert!(!app.has_dialog());
        assert_eq!(app.session.plan().category("rent").unwrap().percent, 35.0);
    }
}
