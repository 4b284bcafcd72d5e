//! Built-in game tables
//!
//! Hardcoded fallback for every table the engine reads. `GameTables::export`
//! writes these out as RON for editing.

use crate::economy::{CostTables, CostTierTable, RarTier};
use crate::planner::StatRatio;
use crate::progression::{
    CapacityTable, ExpCurve, ExpTier, ExperienceModel, RankEntry, RankTable,
};

use super::loader::{GameTables, TABLES_VERSION};

/// Experience thresholds for ranks 0 through 99
const RANK_THRESHOLDS: [u64; 100] = [
    0, 2_170_000_000, 17_400_000_000, 58_600_000_000, 139_000_000_000,
    271_000_000_000, 469_000_000_000, 745_000_000_000, 1_110_000_000_000, 1_580_000_000_000,
    2_170_000_000_000, 2_890_000_000_000, 3_750_000_000_000, 4_770_000_000_000, 5_960_000_000_000,
    7_330_000_000_000, 8_900_000_000_000, 10_700_000_000_000, 12_700_000_000_000, 14_900_000_000_000,
    17_400_000_000_000, 20_100_000_000_000, 23_100_000_000_000, 26_400_000_000_000, 30_000_000_000_000,
    33_900_000_000_000, 38_200_000_000_000, 42_800_000_000_000, 47_700_000_000_000, 53_000_000_000_000,
    58_600_000_000_000, 64_700_000_000_000, 71_200_000_000_000, 78_100_000_000_000, 85_400_000_000_000,
    93_100_000_000_000, 101_000_000_000_000, 110_000_000_000_000, 119_000_000_000_000, 129_000_000_000_000,
    139_000_000_000_000, 150_000_000_000_000, 161_000_000_000_000, 173_000_000_000_000, 185_000_000_000_000,
    198_000_000_000_000, 211_000_000_000_000, 225_000_000_000_000, 240_000_000_000_000, 256_000_000_000_000,
    271_000_000_000_000, 288_000_000_000_000, 305_000_000_000_000, 323_000_000_000_000, 342_000_000_000_000,
    361_000_000_000_000, 381_000_000_000_000, 402_000_000_000_000, 424_000_000_000_000, 446_000_000_000_000,
    469_000_000_000_000, 493_000_000_000_000, 518_000_000_000_000, 543_000_000_000_000, 569_000_000_000_000,
    596_000_000_000_000, 624_000_000_000_000, 653_000_000_000_000, 683_000_000_000_000, 713_000_000_000_000,
    745_000_000_000_000, 777_000_000_000_000, 811_000_000_000_000, 845_000_000_000_000, 880_000_000_000_000,
    916_000_000_000_000, 953_000_000_000_000, 992_000_000_000_000, 1_030_000_000_000_000, 1_070_000_000_000_000,
    1_110_000_000_000_000, 1_150_000_000_000_000, 1_200_000_000_000_000, 1_240_000_000_000_000, 1_290_000_000_000_000,
    1_330_000_000_000_000, 1_380_000_000_000_000, 1_430_000_000_000_000, 1_480_000_000_000_000, 1_530_000_000_000_000,
    1_580_000_000_000_000, 1_640_000_000_000_000, 1_690_000_000_000_000, 1_750_000_000_000_000, 1_800_000_000_000_000,
    1_860_000_000_000_000, 1_920_000_000_000_000, 1_980_000_000_000_000, 2_040_000_000_000_000, 2_110_000_000_000_000,
];

/// Experience curves for HP and MP
pub fn default_experience_model() -> ExperienceModel {
    ExperienceModel {
        hp: ExpCurve {
            offset: 50,
            multiplier: 5,
            base_increment: 50,
            tiers: vec![
                ExpTier::new(0, Some(5_800_000), 50),
                ExpTier::new(5_800_000, Some(5_975_000), 25),
                ExpTier::new(5_975_000, Some(6_000_000), 10),
                ExpTier::new(6_000_000, None, 1),
            ],
        },
        mp: ExpCurve {
            offset: 25,
            multiplier: 10,
            base_increment: 25,
            tiers: vec![
                ExpTier::new(0, Some(2_774_375), 25),
                ExpTier::new(2_774_375, Some(2_997_000), 5),
                ExpTier::new(2_997_000, None, 1),
            ],
        },
    }
}

pub fn default_rank_table() -> RankTable {
    RankTable::new(
        RANK_THRESHOLDS
            .iter()
            .enumerate()
            .map(|(rank, &exp_threshold)| RankEntry { rank: rank as u32, exp_threshold })
            .collect(),
    )
}

pub fn default_capacity_table() -> CapacityTable {
    CapacityTable::from_thresholds(&default_rank_table())
}

/// Rar cost schedules for HP and MP
pub fn default_cost_tables() -> CostTables {
    CostTables {
        hp: CostTierTable::new(vec![
            RarTier::new(0, Some(1_000_000), 10_000, 2, "0 - 1M"),
            RarTier::new(1_000_000, Some(3_000_000), 10_000, 5, "1M - 3M"),
            RarTier::new(3_000_000, Some(5_000_000), 5_000, 8, "3M - 5M"),
            RarTier::new(5_000_000, Some(6_000_000), 1_000, 4, "5M - 6M"),
            RarTier::new(6_000_000, None, 100, 3, "6M+"),
        ]),
        mp: CostTierTable::new(vec![
            RarTier::new(0, Some(500_000), 5_000, 2, "0 - 500K"),
            RarTier::new(500_000, Some(1_500_000), 5_000, 5, "500K - 1.5M"),
            RarTier::new(1_500_000, Some(2_500_000), 2_500, 6, "1.5M - 2.5M"),
            RarTier::new(2_500_000, Some(3_000_000), 500, 4, "2.5M - 3M"),
            RarTier::new(3_000_000, None, 50, 3, "3M+"),
        ]),
    }
}

/// HP:MP split used when both stats are raised together
pub fn default_both_ratio() -> StatRatio {
    StatRatio { hp: 2, mp: 1 }
}

pub fn default_tables() -> GameTables {
    GameTables {
        version: TABLES_VERSION,
        experience: default_experience_model(),
        ranks: default_rank_table(),
        capacities: default_capacity_table(),
        costs: default_cost_tables(),
        both_ratio: default_both_ratio(),
    }
}
