//! Summary panel view
//!
//! Shows the budget, per-group totals, the overall percent total and the
//! balance state, mirroring the summary card next to the category table.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_percent;
use crate::models::Money;
use crate::tui::app::App;

use super::group_color;

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let overview = app.session.overview();

    let block = Block::default()
        .title(" Budget plan ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Budget: ", Style::default().fg(Color::White)),
            Span::styled(
                Money::from_f64_rounded(overview.budget).format(overview.currency),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", overview.currency.code()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];

    for summary in &overview.groups {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<13}", format!("{}:", summary.group.name())),
                Style::default().fg(group_color(summary.group)),
            ),
            Span::styled(
                format!("{:>7}", format!("{}%", format_percent(summary.percent_total))),
                Style::default().fg(Color::White),
            ),
            Span::raw("   "),
            Span::styled(
                summary.amount_total.format(overview.currency),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    lines.push(Line::from(""));

    let total_color = if overview.is_balanced {
        Color::Green
    } else {
        Color::Red
    };
    let mut total_spans = vec![
        Span::styled("Total percent: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{:.2}%", overview.all_percent_total),
            Style::default()
                .fg(total_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !overview.is_balanced {
        total_spans.push(Span::styled(
            "  Percentages must sum to 100%",
            Style::default().fg(Color::Red),
        ));
    }
    lines.push(Line::from(total_spans));

    lines.push(Line::from(vec![
        Span::styled("Total: ", Style::default().fg(Color::White)),
        Span::styled(
            overview.total_amount().format(overview.currency),
            Style::default().fg(Color::White),
        ),
    ]));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
