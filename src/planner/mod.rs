//! Composite queries
//!
//! Combine the experience model, the rank table and the Rar economy into the
//! questions a player actually asks: how far can I go before ranking up, what
//! does the next rank cost, and what does a given pair of stats cost.

pub mod capacity;
pub mod target;
pub mod price;

pub use capacity::{plan_capacity, CapacityPlan};
pub use target::{plan_target_rank, AllocationPolicy, StatRatio, TargetPlan};
pub use price::{price_stats, StatPrice};
