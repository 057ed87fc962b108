//! Core data models for apportion-cli
//!
//! This module contains the data structures that represent the allocation
//! domain: the group taxonomy, supported currencies, monetary amounts, the
//! category preset, and the allocation plan snapshot.

pub mod category;
pub mod currency;
pub mod group;
pub mod money;
pub mod plan;

pub use category::{preset_categories, Category};
pub use currency::Currency;
pub use group::Group;
pub use money::Money;
pub use plan::{AllocationPlan, DEFAULT_BUDGET};
