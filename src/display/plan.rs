//! Plan display formatting
//!
//! Formats the derived view model for terminal output: the category table,
//! the group summary block, and the preset category tree.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::models::{Category, Group};
use crate::services::PlanOverview;

/// Format a percent value without a trailing unit.
///
/// Whole values print without a fractional part ("35"), anything else with
/// two digits ("12.50"), matching the totals display.
pub fn format_percent(percent: f64) -> String {
    if (percent - percent.round()).abs() < 1e-9 {
        format!("{}", percent.round() as i64)
    } else {
        format!("{:.2}", percent)
    }
}

#[derive(Tabled)]
struct PlanTableRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Percent")]
    percent: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the category table of an overview
pub fn format_plan_table(overview: &PlanOverview) -> String {
    let rows: Vec<PlanTableRow> = overview
        .lines
        .iter()
        .map(|line| PlanTableRow {
            name: line.name.clone(),
            group: line.group.name().to_string(),
            percent: format!("{}%", format_percent(line.percent)),
            amount: line.amount.format(overview.currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));

    table.to_string()
}

/// Format the summary block: budget, group totals, overall percent
pub fn format_plan_summary(overview: &PlanOverview) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Budget: {}\n\n",
        crate::models::Money::from_f64_rounded(overview.budget).format(overview.currency)
    ));

    let name_width = Group::all()
        .iter()
        .map(|g| g.name().len())
        .max()
        .unwrap_or(0);

    for summary in &overview.groups {
        output.push_str(&format!(
            "  {:<width$}  {:>7}  {}\n",
            format!("{}:", summary.group.name()),
            format!("{}%", format_percent(summary.percent_total)),
            summary.amount_total.format(overview.currency),
            width = name_width + 1
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Total percent: {:.2}%\n",
        overview.all_percent_total
    ));
    output.push_str(&format!(
        "Total: {}\n",
        overview.total_amount().format(overview.currency)
    ));

    if !overview.is_balanced {
        output.push_str(&format!(
            "\nWarning: percentages must sum to 100% (currently {:.2}%).\n",
            overview.all_percent_total
        ));
        output.push_str("Adjust the values for a correct allocation.\n");
    }

    output
}

/// Format the category list as a tree grouped by spending group
pub fn format_category_tree(categories: &[Category]) -> String {
    let mut output = String::new();

    for (i, group) in Group::all().iter().enumerate() {
        output.push_str(&format!("{}\n", group.name()));

        let members: Vec<&Category> = categories.iter().filter(|c| c.group == *group).collect();
        for (j, category) in members.iter().enumerate() {
            let is_last = j == members.len() - 1;
            let prefix = if is_last { "└── " } else { "├── " };

            output.push_str(&format!(
                "  {}{} ({}): {}%\n",
                prefix,
                category.name,
                category.key,
                format_percent(category.percent)
            ));
        }

        if i < Group::all().len() - 1 {
            output.push('\n');
        }
    }

    output
}
