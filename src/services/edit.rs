//! Mutation protocol for the allocation plan
//!
//! The three permitted write operations. Each validates its input and
//! returns a new plan snapshot; the input plan is never mutated. Invalid
//! input never raises an error here: a bad percent edit or currency code is
//! a no-op and a cleared budget normalizes to zero, so the caller always
//! gets a usable snapshot back.

use std::str::FromStr;

use crate::models::{AllocationPlan, Category, Currency};

/// Replace one category's percent, identified by key.
///
/// `None` and non-finite values are no-ops, mirroring an empty input box
/// being ignored rather than treated as zero. An unknown key is also a
/// no-op. Values outside 0-100 are accepted; clamping is the input
/// boundary's job, and an out-of-range value only drives the percent total
/// further from 100.
pub fn set_category_percent(plan: &AllocationPlan, key: &str, value: Option<f64>) -> AllocationPlan {
    let percent = match value {
        Some(v) if v.is_finite() => v,
        _ => return plan.clone(),
    };

    AllocationPlan {
        categories: plan
            .categories
            .iter()
            .map(|c| {
                if c.key == key {
                    Category {
                        percent,
                        ..c.clone()
                    }
                } else {
                    c.clone()
                }
            })
            .collect(),
        budget: plan.budget,
        currency: plan.currency,
    }
}

/// Replace the budget.
///
/// Unlike percent edits, a missing value is not ignored: a cleared budget
/// field becomes zero. Non-finite values also normalize to zero and
/// negative values clamp to zero, keeping the stored budget a non-negative
/// real number.
pub fn set_budget(plan: &AllocationPlan, value: Option<f64>) -> AllocationPlan {
    let budget = match value {
        Some(v) if v.is_finite() => v.max(0.0),
        _ => 0.0,
    };

    AllocationPlan {
        categories: plan.categories.clone(),
        budget,
        currency: plan.currency,
    }
}

/// Replace the display currency.
///
/// The code is matched case-insensitively against the supported set. An
/// unrecognized code is a no-op, never a silent default.
pub fn set_currency(plan: &AllocationPlan, code: &str) -> AllocationPlan {
    match Currency::from_str(code) {
        Ok(currency) => AllocationPlan {
            categories: plan.categories.clone(),
            budget: plan.budget,
            currency,
        },
        Err(_) => plan.clone(),
    }
}
