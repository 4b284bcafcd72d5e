//! Discount factor
//!
//! Caller-supplied percentage off the Rar price of every upgrade.

use serde::{Deserialize, Serialize};

/// Largest accepted discount; 100% would make every tier free
pub const MAX_DISCOUNT_PERCENT: u8 = 99;

/// Multiplicative price reduction derived from a percentage in `[0, 99]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscountFactor {
    percent: u8,
}

impl DiscountFactor {
    /// Build from a percentage, clamping anything above 99
    pub fn new(percent: u8) -> Self {
        Self { percent: percent.min(MAX_DISCOUNT_PERCENT) }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Discounted price of a single upgrade, floored
    pub fn apply(&self, cost: u64) -> u64 {
        self.apply_steps(1, cost)
    }

    /// Discounted price of `steps` upgrades, floored once over the whole run
    pub fn apply_steps(&self, steps: u64, cost: u64) -> u64 {
        let full = steps as u128 * cost as u128;
        let paid = full * u128::from(100 - self.percent) / 100;
        u64::try_from(paid).unwrap_or(u64::MAX)
    }
}

impl From<u8> for DiscountFactor {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}
