//! Rar currency economy
//!
//! Pricing stat upgrades in Rar, and the inverse: how far a Rar or experience
//! budget can carry a stat.

pub mod tiers;
pub mod discount;
pub mod cost;
pub mod allocate;
pub mod spend;

pub use tiers::{RarTier, CostTierTable, CostTables};
pub use discount::{DiscountFactor, MAX_DISCOUNT_PERCENT};
pub use cost::{forward_cost, CostBreakdown, TierCost};
pub use allocate::{allocate_budget, Allocation};
pub use spend::{spend_exp, spend_exp_on, ExpSpend};
