//! Experience budget spending
//!
//! Raises a stat for as long as an experience budget lasts, pricing each
//! upgrade twice: in experience through the stat's curve and in Rar through
//! the cost tiers. The two tier sets do not line up, so an upgrade is charged
//! the difference in cumulative experience between its two ends. Those
//! differences telescope, so a run of upgrades inside one Rar tier costs
//! `cumulative_exp(to) - cumulative_exp(from)` and the affordable count is
//! found by binary search instead of stepping one upgrade at a time.

use serde::{Deserialize, Serialize};

use super::discount::DiscountFactor;
use super::tiers::{clamp_to_floor, CostTables, RarTier};
use crate::progression::{ExpCurve, ExperienceModel, StatType};

/// Outcome of spending an experience budget on one stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpSpend {
    pub start: u64,
    pub final_stat: u64,
    pub gain: u64,
    pub exp_budget: u64,
    pub exp_used: u64,
    pub upgrades: u64,
    /// Rar cost of the upgrades taken
    pub cost: u64,
}

impl ExpSpend {
    fn unchanged(value: u64, exp_budget: u64) -> Self {
        Self {
            start: value,
            final_stat: value,
            gain: 0,
            exp_budget,
            exp_used: 0,
            upgrades: 0,
            cost: 0,
        }
    }

    pub fn exp_left(&self) -> u64 {
        self.exp_budget - self.exp_used
    }

    fn take(&mut self, upgrades: u64, exp: u64, cost: u64) {
        self.upgrades += upgrades;
        self.exp_used += exp;
        self.cost = self.cost.saturating_add(cost);
    }
}

/// Spend `exp_budget` raising `stat` from `start_stat`
pub fn spend_exp(
    start_stat: u64,
    exp_budget: u64,
    stat: StatType,
    model: &ExperienceModel,
    costs: &CostTables,
    discount_percent: u8,
) -> ExpSpend {
    spend_exp_on(
        start_stat,
        exp_budget,
        model.curve(stat),
        costs.table(stat).tiers(),
        discount_percent,
    )
}

/// Spend an experience budget against an explicit curve and tier set.
///
/// Stops at the first upgrade whose experience exceeds what is left. The
/// experience used always equals the rise in `cumulative_exp`, and the last
/// upgrade of a Rar tier is capped at the tier's ceiling.
pub fn spend_exp_on(
    start_stat: u64,
    exp_budget: u64,
    curve: &ExpCurve,
    tiers: &[RarTier],
    discount_percent: u8,
) -> ExpSpend {
    if exp_budget == 0 || tiers.is_empty() {
        return ExpSpend::unchanged(start_stat, exp_budget);
    }

    let discount = DiscountFactor::new(discount_percent);
    let start = clamp_to_floor(start_stat, tiers);
    let mut spend = ExpSpend::unchanged(start, exp_budget);
    let mut value = start;
    let mut remaining = exp_budget;

    for tier in tiers {
        if tier.increment == 0 || value >= tier.end() {
            continue;
        }
        value = value.max(tier.min);
        let unit_cost = discount.apply(tier.cost_per_upgrade);
        let step = tier.increment;

        let whole_steps = (tier.end() - value) / step;
        let n = affordable_steps(curve, value, step, whole_steps, remaining);
        if n > 0 {
            let to = value + n * step;
            let exp = curve.step_exp(value, to);
            remaining -= exp;
            spend.take(n, exp, n.saturating_mul(unit_cost));
            value = to;
        }
        if n < whole_steps {
            break;
        }

        // Less than a full increment left below the ceiling
        if value < tier.end() {
            let exp = curve.step_exp(value, tier.end());
            if exp > remaining {
                break;
            }
            remaining -= exp;
            spend.take(1, exp, unit_cost);
            value = tier.end();
        }
    }

    spend.final_stat = value;
    spend.gain = value - start;
    spend
}

/// Largest `n <= max_steps` whose combined experience fits in `budget`
fn affordable_steps(curve: &ExpCurve, from: u64, step: u64, max_steps: u64, budget: u64) -> u64 {
    let exp_of = |n: u64| curve.step_exp(from, from + n * step);

    if exp_of(max_steps) <= budget {
        return max_steps;
    }

    // exp_of(lo) fits, exp_of(hi) does not
    let (mut lo, mut hi) = (0u64, max_steps);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if exp_of(mid) <= budget {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::defaults::{default_cost_tables, default_experience_model};
    use crate::progression::ExpTier;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// One upgrade at a time, as the walk is defined
    fn stepwise(start_stat: u64, exp_budget: u64, curve: &ExpCurve, tiers: &[RarTier], discount_percent: u8) -> ExpSpend {
        if exp_budget == 0 || tiers.is_empty() {
            return ExpSpend::unchanged(start_stat, exp_budget);
        }
        let discount = DiscountFactor::new(discount_percent);
        let start = clamp_to_floor(start_stat, tiers);
        let mut spend = ExpSpend::unchanged(start, exp_budget);
        let mut value = start;
        let mut remaining = exp_budget;
        'tiers: for tier in tiers {
            if value >= tier.end() {
                continue;
            }
            while value < tier.end() {
                let next = value.saturating_add(tier.increment).min(tier.end());
                let exp = curve.step_exp(value, next);
                if exp > remaining {
                    break 'tiers;
                }
                remaining -= exp;
                spend.exp_used += exp;
                spend.upgrades += 1;
                spend.cost += discount.apply(tier.cost_per_upgrade);
                value = next;
            }
        }
        spend.final_stat = value;
        spend.gain = value - start;
        spend
    }

    fn small_curve() -> ExpCurve {
        ExpCurve {
            offset: 50,
            multiplier: 5,
            base_increment: 50,
            tiers: vec![
                ExpTier::new(0, Some(2_000), 50),
                ExpTier::new(2_000, Some(3_010), 10),
                ExpTier::new(3_010, None, 1),
            ],
        }
    }

    fn small_tiers() -> Vec<RarTier> {
        vec![
            RarTier::new(0, Some(1_230), 100, 3, "A"),
            RarTier::new(1_230, Some(2_500), 20, 2, "B"),
            RarTier::new(2_500, None, 7, 1, "C"),
        ]
    }

    #[test]
    fn test_zero_budget() {
        let model = default_experience_model();
        let costs = default_cost_tables();
        let s = spend_exp(1_234_567, 0, StatType::Hp, &model, &costs, 0);
        assert_eq!(s.final_stat, 1_234_567);
        assert_eq!(s.gain, 0);
        assert_eq!(s.cost, 0);
    }

    #[test]
    fn test_matches_stepwise_on_small_tables() {
        let curve = small_curve();
        let tiers = small_tiers();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..300 {
            let start: u64 = rng.gen_range(0..4_000);
            let budget: u64 = rng.gen_range(0..200_000_000);
            let discount: u8 = rng.gen_range(0..=99);
            assert_eq!(
                spend_exp_on(start, budget, &curve, &tiers, discount),
                stepwise(start, budget, &curve, &tiers, discount),
                "start {} budget {} discount {}",
                start,
                budget,
                discount
            );
        }
    }

    #[test]
    fn test_matches_stepwise_on_default_tables() {
        let model = default_experience_model();
        let costs = default_cost_tables();
        for (stat, start, budget) in [
            (StatType::Hp, 0, 5_000_000_000_000),
            (StatType::Hp, 5_790_000, 30_000_000_000_000),
            (StatType::Hp, 6_000_000, 10_000_000_000_000),
            (StatType::Mp, 2_700_000, 40_000_000_000_000),
            (StatType::Mp, 3_000_000, 2_000_000_000_000),
        ] {
            let fast = spend_exp(start, budget, stat, &model, &costs, 15);
            let slow = stepwise(start, budget, model.curve(stat), costs.table(stat).tiers(), 15);
            assert_eq!(fast, slow, "{} from {} with {}", stat, start, budget);
            assert!(fast.exp_used <= budget);
            assert!(fast.gain > 0);
        }
    }

    #[test]
    fn test_exact_budget_is_spent() {
        let model = default_experience_model();
        let costs = default_cost_tables();
        // Exactly the experience of raising HP 0 -> 1_000_000 in 10_000 steps
        let budget = model.cumulative_exp(StatType::Hp, 1_000_000);
        let s = spend_exp(0, budget, StatType::Hp, &model, &costs, 0);
        assert_eq!(s.final_stat, 1_000_000);
        assert_eq!(s.exp_used, budget);
        assert_eq!(s.cost, 200);

        let short = spend_exp(0, budget - 1, StatType::Hp, &model, &costs, 0);
        assert_eq!(short.final_stat, 990_000);
        assert_eq!(short.cost, 198);
    }

    #[test]
    fn test_huge_budget_terminates() {
        let model = default_experience_model();
        let costs = default_cost_tables();
        let s = spend_exp(6_000_000, u64::MAX, StatType::Hp, &model, &costs, 0);
        assert!(s.final_stat > 6_000_000);
        assert!(s.exp_used <= u64::MAX);
    }
}
