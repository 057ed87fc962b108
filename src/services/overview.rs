//! Derivation engine
//!
//! A single stateless transform from an allocation plan to the view model
//! the presentation layer renders. Recomputed after every accepted mutation,
//! never cached across a model change, and total: an unbalanced plan still
//! produces a complete overview.

use serde::Serialize;

use crate::models::{AllocationPlan, Currency, Group, Money};

/// Tolerance for the balance check.
///
/// Summed user-entered decimals rarely land exactly on 100.0 in binary
/// floating point, so the invariant compares against this epsilon instead
/// of using strict equality.
pub const BALANCE_EPSILON: f64 = 1e-9;

/// One derived table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLine {
    /// Stable category key
    pub key: String,
    /// Display label
    pub name: String,
    /// Owning group
    pub group: Group,
    /// Allocated percent as stored
    pub percent: f64,
    /// round(budget * percent / 100), half away from zero
    pub amount: Money,
}

/// Derived totals for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub group: Group,
    /// Sum of member percents
    pub percent_total: f64,
    /// Sum of already-rounded member amounts. This can differ from
    /// round(budget * percent_total / 100) by design.
    pub amount_total: Money,
}

/// The complete derived view model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanOverview {
    /// Rows in plan display order
    pub lines: Vec<CategoryLine>,
    /// Group summaries in group display order
    pub groups: Vec<GroupSummary>,
    /// Sum of all category percents
    pub all_percent_total: f64,
    /// Whether the percents add up to 100 (within [`BALANCE_EPSILON`])
    pub is_balanced: bool,
    /// Budget carried through for display
    pub budget: f64,
    /// Currency carried through for display
    pub currency: Currency,
}

/// Recompute the view model from a plan snapshot
pub fn derive_overview(plan: &AllocationPlan) -> PlanOverview {
    let lines: Vec<CategoryLine> = plan
        .categories
        .iter()
        .map(|c| CategoryLine {
            key: c.key.clone(),
            name: c.name.clone(),
            group: c.group,
            percent: c.percent,
            amount: Money::from_f64_rounded(plan.budget * c.percent / 100.0),
        })
        .collect();

    let groups: Vec<GroupSummary> = Group::all()
        .iter()
        .map(|&group| {
            let members = lines.iter().filter(|l| l.group == group);
            GroupSummary {
                group,
                percent_total: members.clone().map(|l| l.percent).sum(),
                amount_total: members.map(|l| l.amount).sum(),
            }
        })
        .collect();

    let all_percent_total: f64 = lines.iter().map(|l| l.percent).sum();

    PlanOverview {
        lines,
        groups,
        all_percent_total,
        is_balanced: (all_percent_total - 100.0).abs() < BALANCE_EPSILON,
        budget: plan.budget,
        currency: plan.currency,
    }
}

impl PlanOverview {
    /// Sum of all per-category amounts
    pub fn total_amount(&self) -> Money {
        self.lines.iter().map(|l| l.amount).sum()
    }

    /// Look up the summary for one group
    pub fn group(&self, group: Group) -> &GroupSummary {
        self.groups
            .iter()
            .find(|g| g.group == group)
            .expect("summaries cover every group")
    }
}
