//! Dansu - HP/MP progression economy
//!
//! Turns raw HP and MP into cumulative experience, resolves that experience
//! to a rank (dansu), and prices stat upgrades in Rar, forwards and backwards.

pub mod progression;
pub mod economy;
pub mod planner;
pub mod data;
pub mod input;
pub mod display;

// Re-export commonly used types
pub use data::{GameTables, TableError};
pub use economy::{allocate_budget, forward_cost, spend_exp, CostBreakdown, DiscountFactor};
pub use planner::{plan_capacity, plan_target_rank, price_stats, AllocationPolicy};
pub use progression::{ExperienceModel, RankStatus, RankTable, StatType};
