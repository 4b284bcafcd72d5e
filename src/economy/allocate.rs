//! Reverse allocation
//!
//! Walks the Rar tiers upward to find how far a currency budget can raise a
//! stat.

use serde::{Deserialize, Serialize};

use super::discount::DiscountFactor;
use super::tiers::{clamp_to_floor, RarTier};

/// Outcome of spending a Rar budget on one stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub start: u64,
    pub final_value: u64,
    pub total_gain: u64,
    pub upgrades: u64,
    pub spent: u64,
    pub remaining_budget: u64,
}

impl Allocation {
    fn unchanged(value: u64, budget: u64) -> Self {
        Self {
            start: value,
            final_value: value,
            total_gain: 0,
            upgrades: 0,
            spent: 0,
            remaining_budget: budget,
        }
    }
}

/// Highest stat value reachable from `current` with `budget` Rar.
///
/// A tier made free by the discount is skipped straight to its ceiling, except
/// the unbounded tail tier, which stops the walk. The last upgrade in a tier
/// lands on the ceiling even when the increment would overshoot it.
pub fn allocate_budget(current: u64, budget: u64, tiers: &[RarTier], discount_percent: u8) -> Allocation {
    if budget == 0 || tiers.is_empty() {
        return Allocation::unchanged(current, budget);
    }

    let discount = DiscountFactor::new(discount_percent);
    let start = clamp_to_floor(current, tiers);
    let mut value = start;
    let mut remaining = budget;
    let mut upgrades_total = 0u64;

    for tier in tiers {
        if remaining == 0 {
            break;
        }
        if tier.increment == 0 || value >= tier.end() {
            continue;
        }
        value = value.max(tier.min);

        let unit_cost = discount.apply(tier.cost_per_upgrade);
        if unit_cost == 0 {
            if tier.is_unbounded() {
                break;
            }
            value = tier.end();
            continue;
        }

        let affordable = remaining / unit_cost;
        let needed = tier.max.map(|max| tier.upgrades_for(max - value));
        let upgrades = needed.map_or(affordable, |needed| affordable.min(needed));
        if upgrades == 0 {
            break;
        }

        let gain = upgrades.saturating_mul(tier.increment);
        value = value.saturating_add(gain).min(tier.end());
        remaining -= upgrades * unit_cost;
        upgrades_total += upgrades;

        if needed.map_or(true, |needed| upgrades < needed) {
            break;
        }
    }

    Allocation {
        start,
        final_value: value,
        total_gain: value - start,
        upgrades: upgrades_total,
        spent: budget - remaining,
        remaining_budget: remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::defaults::default_cost_tables;
    use crate::economy::cost::forward_cost;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn tiers() -> Vec<RarTier> {
        vec![
            RarTier::new(100, Some(1_000), 100, 2, "A"),
            RarTier::new(1_000, Some(2_000), 50, 3, "B"),
            RarTier::new(2_000, None, 10, 1, "C"),
        ]
    }

    #[test]
    fn test_zero_budget_is_noop() {
        let t = tiers();
        for x in [0, 99, 100, 1_500, 10_000] {
            for d in [0, 50, 99] {
                let a = allocate_budget(x, 0, &t, d);
                assert_eq!(a.final_value, x);
                assert_eq!(a.total_gain, 0);
            }
        }
    }

    #[test]
    fn test_within_one_tier() {
        let a = allocate_budget(100, 7, &tiers(), 0);
        assert_eq!(a.final_value, 400);
        assert_eq!(a.total_gain, 300);
        assert_eq!(a.spent, 6);
        assert_eq!(a.remaining_budget, 1);
    }

    #[test]
    fn test_crosses_tiers() {
        // A: 9 upgrades (18), B: 20 upgrades (60), C: 22 left -> 22 upgrades
        let a = allocate_budget(100, 100, &tiers(), 0);
        assert_eq!(a.final_value, 2_220);
        assert_eq!(a.remaining_budget, 0);
        assert_eq!(a.upgrades, 9 + 20 + 22);
    }

    #[test]
    fn test_unaligned_start_lands_on_ceiling() {
        // 950 -> 1000 is one full upgrade, capped at the ceiling
        let a = allocate_budget(950, 2, &tiers(), 0);
        assert_eq!(a.final_value, 1_000);
        assert_eq!(a.remaining_budget, 0);
    }

    #[test]
    fn test_stops_when_next_upgrade_unaffordable() {
        let a = allocate_budget(1_000, 2, &tiers(), 0);
        assert_eq!(a.final_value, 1_000);
        assert_eq!(a.remaining_budget, 2);
    }

    #[test]
    fn test_free_tiers() {
        let t = vec![
            RarTier::new(0, Some(1_000), 100, 50, "cheap"),
            RarTier::new(1_000, None, 10, 50, "tail"),
        ];
        // 50 * 0.01 floors to 0: the finite tier is free, the tail is not completed
        let a = allocate_budget(0, 1, &t, 99);
        assert_eq!(a.final_value, 1_000);
        assert_eq!(a.remaining_budget, 1);
        assert_eq!(a.spent, 0);
    }

    #[test]
    fn test_below_floor_is_clamped() {
        let a = allocate_budget(0, 2, &tiers(), 0);
        assert_eq!(a.start, 100);
        assert_eq!(a.final_value, 200);
    }

    #[test]
    fn test_forward_reverse_consistency() {
        let costs = default_cost_tables();
        let mut rng = StdRng::seed_from_u64(7);
        for table in [&costs.hp, &costs.mp] {
            for _ in 0..500 {
                let current: u64 = rng.gen_range(0..9_000_000);
                let target: u64 = rng.gen_range(current + 1..=10_000_000);
                let cost = forward_cost(current, target, table.tiers(), 0).total_cost;
                let reached = allocate_budget(current, cost, table.tiers(), 0).final_value;
                assert!(reached >= target, "{} -> {} cost {} only reached {}", current, target, cost, reached);
            }
        }
    }

    #[test]
    fn test_default_tables() {
        let costs = default_cost_tables();
        let a = allocate_budget(0, 200, costs.hp.tiers(), 0);
        assert_eq!(a.final_value, 1_000_000);
        // Half price: 100 Rar clears the first tier, the rest buys 50 upgrades at 2 Rar
        assert_eq!(allocate_budget(0, 200, costs.hp.tiers(), 50).final_value, 1_500_000);
    }
}
