//! Allocation table view
//!
//! Shows all categories grouped under their group headers with percent and
//! amount columns. Selection moves over category rows only.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::display::format_percent;
use crate::models::Group;
use crate::tui::app::App;

use super::group_color;

/// Render the category table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let overview = app.session.overview();

    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    // Build rows with group headers; track which table row maps to which
    // category index so the highlight lands on the right line.
    let mut rows: Vec<Row> = Vec::new();
    let mut row_to_category_index: Vec<Option<usize>> = Vec::new();

    for &group in Group::all() {
        rows.push(
            Row::new(vec![Cell::from(format!("▼ {}", group.name()))]).style(
                Style::default()
                    .fg(group_color(group))
                    .add_modifier(Modifier::BOLD),
            ),
        );
        row_to_category_index.push(None);

        for (index, line) in overview
            .lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.group == group)
        {
            rows.push(Row::new(vec![
                Cell::from(format!("  {}", line.name)),
                Cell::from(format!("{}%", format_percent(line.percent))),
                Cell::from(line.amount.format(overview.currency))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            ]));
            row_to_category_index.push(Some(index));
        }
    }

    let widths = [
        ratatui::layout::Constraint::Min(20),    // Category name
        ratatui::layout::Constraint::Length(10), // Percent
        ratatui::layout::Constraint::Length(16), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Percent").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let selected_row = row_to_category_index
        .iter()
        .position(|&idx| idx == Some(app.selected_index));

    let mut state = TableState::default();
    state.select(selected_row);

    frame.render_stateful_widget(table, area, &mut state);
}
