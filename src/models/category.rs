//! Category model and the fixed preset
//!
//! Categories are created once from the preset table at startup and are
//! never added or removed at runtime. The `key` is the stable identity used
//! by edit events; it is never regenerated.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::group::Group;

/// A spending category with its allocated percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Stable unique identifier (e.g. "rent")
    pub key: String,

    /// Display label
    pub name: String,

    /// The group this category belongs to
    pub group: Group,

    /// Allocated share of the budget, conceptually 0-100.
    /// The engine does not clamp this; the input boundary does.
    pub percent: f64,
}

impl Category {
    /// Create a new category
    pub fn new(key: impl Into<String>, name: impl Into<String>, group: Group, percent: f64) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            group,
            percent,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The fixed preset: key, display name, group, default percent
const PRESET: [(&str, &str, Group, f64); 12] = [
    ("rent", "Rent", Group::Needs, 35.0),
    ("groceries", "Groceries", Group::Needs, 15.0),
    ("utilities", "Utilities", Group::Needs, 5.0),
    ("mobile", "Communication", Group::Needs, 3.0),
    ("transport", "Transport", Group::Needs, 5.0),
    ("hygiene", "Hygiene", Group::Needs, 3.0),
    ("meds", "Medicine", Group::Needs, 7.0),
    ("shopping", "Shopping", Group::Wants, 7.0),
    ("fun", "Entertainment", Group::Wants, 5.0),
    ("travel", "Travel", Group::Wants, 5.0),
    ("invest", "Investments", Group::Investments, 5.0),
    ("reserve", "Reserve fund", Group::Investments, 5.0),
];

/// Build the preset category list in display order
pub fn preset_categories() -> Vec<Category> {
    PRESET
        .iter()
        .map(|(key, name, group, percent)| Category::new(*key, *name, *group, *percent))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_has_twelve_categories() {
        let categories = preset_categories();
        assert_eq!(categories.len(), 12);
    }

    #[test]
    fn test_preset_keys_are_unique() {
        let categories = preset_categories();
        let mut keys: Vec<_> = categories.iter().map(|c| c.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 12);
    }

    #[test]
    fn test_preset_percents_sum_to_100() {
        let total: f64 = preset_categories().iter().map(|c| c.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_preset_first_and_last() {
        let categories = preset_categories();
        assert_eq!(categories[0].key, "rent");
        assert_eq!(categories[0].name, "Rent");
        assert_eq!(categories[0].group, Group::Needs);
        assert_eq!(categories[0].percent, 35.0);

        assert_eq!(categories[11].key, "reserve");
        assert_eq!(categories[11].name, "Reserve fund");
        assert_eq!(categories[11].group, Group::Investments);
        assert_eq!(categories[11].percent, 5.0);
    }

    #[test]
    fn test_preset_group_membership() {
        let categories = preset_categories();
        let needs = categories.iter().filter(|c| c.group == Group::Needs).count();
        let wants = categories.iter().filter(|c| c.group == Group::Wants).count();
        let investments = categories
            .iter()
            .filter(|c| c.group == Group::Investments)
            .count();
        assert_eq!(needs, 7);
        assert_eq!(wants, 3);
        assert_eq!(investments, 2);
    }

    #[test]
    fn test_serialization() {
        let category = Category::new("rent", "Rent", Group::Needs, 35.0);
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
    }
}
