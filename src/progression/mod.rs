//! Progression systems

pub mod stat;
pub mod xp;
pub mod rank;

pub use stat::StatType;
pub use xp::{ExpTier, ExpCurve, ExperienceModel};
pub use rank::{RankEntry, RankTable, RankStatus, RankCapacity, CapacityTable, FLOOR_RANK};
