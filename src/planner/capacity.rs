//! Rank capacity planning
//!
//! How much HP or MP fits under the current rank's experience ceiling.

use serde::{Deserialize, Serialize};

use crate::data::GameTables;
use crate::economy::{spend_exp, ExpSpend};
use crate::progression::{RankStatus, StatType};

/// Headroom left in the current rank, spent on each stat in turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityPlan {
    pub hp: u64,
    pub mp: u64,
    pub total_exp: u64,
    pub rank: RankStatus,
    /// Highest cumulative experience the current rank can hold
    pub capacity: u64,
    pub exp_budget: u64,
    pub hp_spend: ExpSpend,
    pub mp_spend: ExpSpend,
    /// Stat that fills the headroom for less Rar, if either can move at all
    pub recommended: Option<StatType>,
}

impl CapacityPlan {
    pub fn spend(&self, stat: StatType) -> &ExpSpend {
        match stat {
            StatType::Hp => &self.hp_spend,
            StatType::Mp => &self.mp_spend,
        }
    }
}

/// Spend the experience left before the next rank on HP alone and on MP alone
pub fn plan_capacity(tables: &GameTables, hp: u64, mp: u64, discount_percent: u8) -> CapacityPlan {
    let total_exp = tables.experience.total_exp(hp, mp);
    let rank = tables.ranks.rank_for(total_exp);
    let capacity = rank_capacity(tables, &rank, total_exp);
    let exp_budget = capacity.saturating_sub(total_exp);

    let hp_spend = spend_exp(hp, exp_budget, StatType::Hp, &tables.experience, &tables.costs, discount_percent);
    let mp_spend = spend_exp(mp, exp_budget, StatType::Mp, &tables.experience, &tables.costs, discount_percent);
    let recommended = recommend(&hp_spend, &mp_spend);

    log::debug!(
        "capacity: rank {} exp {} cap {} -> hp +{} ({} Rar), mp +{} ({} Rar)",
        rank.rank,
        total_exp,
        capacity,
        hp_spend.gain,
        hp_spend.cost,
        mp_spend.gain,
        mp_spend.cost
    );

    CapacityPlan {
        hp,
        mp,
        total_exp,
        rank,
        capacity,
        exp_budget,
        hp_spend,
        mp_spend,
        recommended,
    }
}

/// Ceiling from the capacity table, else one below the next threshold
fn rank_capacity(tables: &GameTables, rank: &RankStatus, total_exp: u64) -> u64 {
    let listed = if rank.ranked {
        tables.capacities.capacity_for(rank.rank)
    } else {
        None
    };
    listed
        .or_else(|| rank.next_threshold.map(|next| next.saturating_sub(1)))
        .unwrap_or(total_exp)
}

fn recommend(hp: &ExpSpend, mp: &ExpSpend) -> Option<StatType> {
    match (hp.gain > 0, mp.gain > 0) {
        (true, true) if mp.cost < hp.cost => Some(StatType::Mp),
        (true, _) => Some(StatType::Hp),
        (false, true) => Some(StatType::Mp),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::defaults::default_tables;
    use crate::progression::{CapacityTable, RankEntry, RankTable};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_reference_scenario() {
        let tables = default_tables();
        let plan = plan_capacity(&tables, 6_000_000, 3_000_000, 0);
        assert_eq!(plan.total_exp, 342_000_000_000_000);
        assert_eq!(plan.rank.rank, 54);
        assert_eq!(plan.capacity, 360_999_999_999_999);
        assert_eq!(plan.exp_budget, 18_999_999_999_999);

        for stat in StatType::ALL {
            let spend = plan.spend(stat);
            assert!(spend.gain > 0, "{} did not move", stat);
            assert!(spend.exp_used <= plan.exp_budget);
            let after = match stat {
                StatType::Hp => tables.experience.total_exp(spend.final_stat, 3_000_000),
                StatType::Mp => tables.experience.total_exp(6_000_000, spend.final_stat),
            };
            // Still inside rank 54
            assert_eq!(tables.ranks.rank_for(after).rank, 54);
        }
        assert!(plan.recommended.is_some());
    }

    #[test]
    fn test_spends_stay_within_rank() {
        let tables = default_tables();
        let mut rng = StdRng::seed_from_u64(52);
        for _ in 0..2_000 {
            let hp: u64 = rng.gen_range(0..7_000_000);
            let mp: u64 = rng.gen_range(2_000_000..3_100_000);
            let plan = plan_capacity(&tables, hp, mp, 0);
            for stat in StatType::ALL {
                let spend = plan.spend(stat);
                let after = match stat {
                    StatType::Hp => tables.experience.total_exp(spend.final_stat, mp),
                    StatType::Mp => tables.experience.total_exp(hp, spend.final_stat),
                };
                assert_eq!(after, plan.total_exp + spend.exp_used, "hp {} mp {} {}", hp, mp, stat);
                assert!(after <= plan.capacity, "hp {} mp {} {} reached {}", hp, mp, stat, after);
                assert_eq!(tables.ranks.rank_for(after).rank, plan.rank.rank);
            }
        }
    }

    #[test]
    fn test_unaligned_stats_stay_within_rank() {
        let tables = default_tables();
        for (hp, mp) in [(5_852_107, 2_976_986), (33_710, 2_731_530)] {
            let plan = plan_capacity(&tables, hp, mp, 0);
            let after = tables.experience.total_exp(hp, plan.mp_spend.final_stat);
            assert!(after <= plan.capacity);
            assert_eq!(tables.ranks.rank_for(after).rank, plan.rank.rank);
        }
    }

    #[test]
    fn test_recommends_cheaper_stat() {
        let tables = default_tables();
        let plan = plan_capacity(&tables, 6_000_000, 3_000_000, 0);
        let expected = if plan.mp_spend.cost < plan.hp_spend.cost { StatType::Mp } else { StatType::Hp };
        assert_eq!(plan.recommended, Some(expected));
    }

    #[test]
    fn test_recommend_rules() {
        let moved = |gain, cost| ExpSpend {
            start: 0,
            final_stat: gain,
            gain,
            exp_budget: 100,
            exp_used: 10,
            upgrades: 1,
            cost,
        };
        assert_eq!(recommend(&moved(10, 5), &moved(10, 5)), Some(StatType::Hp));
        assert_eq!(recommend(&moved(10, 5), &moved(10, 4)), Some(StatType::Mp));
        assert_eq!(recommend(&moved(0, 0), &moved(10, 9)), Some(StatType::Mp));
        assert_eq!(recommend(&moved(0, 0), &moved(0, 0)), None);
    }

    #[test]
    fn test_missing_capacity_falls_back_to_next_threshold() {
        let mut tables = default_tables();
        tables.ranks = RankTable::new(vec![
            RankEntry { rank: 0, exp_threshold: 0 },
            RankEntry { rank: 1, exp_threshold: 1_000_000_000_000 },
        ]);
        tables.capacities = CapacityTable::default();
        let plan = plan_capacity(&tables, 100_000, 100_000, 0);
        assert_eq!(plan.capacity, 999_999_999_999);
        assert!(plan.hp_spend.exp_used <= plan.exp_budget);
    }

    #[test]
    fn test_top_rank_without_capacity_has_no_budget() {
        let mut tables = default_tables();
        tables.capacities = CapacityTable::default();
        let plan = plan_capacity(&tables, 50_000_000, 50_000_000, 0);
        assert_eq!(plan.rank.rank, 99);
        assert_eq!(plan.exp_budget, 0);
        assert_eq!(plan.recommended, None);
    }
}
