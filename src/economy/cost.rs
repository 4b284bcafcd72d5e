//! Forward cost
//!
//! Prices moving a stat from its current value to a target across every Rar
//! tier the range crosses.

use serde::{Deserialize, Serialize};

use super::discount::DiscountFactor;
use super::tiers::{clamp_to_floor, RarTier};

/// Cost of the part of a stat change that falls in one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCost {
    pub label: String,
    pub from: u64,
    pub to: u64,
    pub steps: u64,
    pub cost: u64,
}

/// Total Rar cost of a stat change with its per-tier breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub from: u64,
    pub to: u64,
    pub total_cost: u64,
    pub tiers: Vec<TierCost>,
}

impl CostBreakdown {
    /// Empty breakdown for a stat that does not move
    pub fn unchanged(value: u64) -> Self {
        Self { from: value, to: value, total_cost: 0, tiers: Vec::new() }
    }

    pub fn gain(&self) -> u64 {
        self.to - self.from
    }

    pub fn total_steps(&self) -> u64 {
        self.tiers.iter().map(|t| t.steps).sum()
    }
}

/// Rar cost of raising a stat from `current` to `target`.
///
/// Values below the table's floor are priced from the floor. Within each tier
/// the step count rounds up, and the discount is floored once per tier.
pub fn forward_cost(current: u64, target: u64, tiers: &[RarTier], discount_percent: u8) -> CostBreakdown {
    if target <= current || tiers.is_empty() {
        return CostBreakdown::unchanged(current);
    }

    let discount = DiscountFactor::new(discount_percent);
    let start = clamp_to_floor(current, tiers);
    if target <= start {
        return CostBreakdown::unchanged(current);
    }

    let mut breakdown = CostBreakdown { from: start, to: target, total_cost: 0, tiers: Vec::new() };
    for tier in tiers {
        let lo = start.max(tier.min);
        let hi = target.min(tier.end());
        if hi <= lo || tier.increment == 0 {
            continue;
        }

        let steps = tier.upgrades_for(hi - lo);
        let cost = discount.apply_steps(steps, tier.cost_per_upgrade);
        breakdown.total_cost = breakdown.total_cost.saturating_add(cost);
        breakdown.tiers.push(TierCost {
            label: tier.label.clone(),
            from: lo,
            to: hi,
            steps,
            cost,
        });
    }

    breakdown
}
