//! Pricing a pair of target stats

use serde::{Deserialize, Serialize};

use crate::data::GameTables;
use crate::economy::{forward_cost, CostBreakdown};
use crate::progression::RankStatus;

/// Rar cost of moving both stats at once, with the rank change it buys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatPrice {
    pub hp: CostBreakdown,
    pub mp: CostBreakdown,
    pub total_cost: u64,
    pub exp_before: u64,
    pub exp_after: u64,
    pub rank_before: RankStatus,
    pub rank_after: RankStatus,
}

/// Price raising HP and MP to their targets. A target at or below the current
/// value leaves that stat unchanged and free.
pub fn price_stats(
    tables: &GameTables,
    current_hp: u64,
    current_mp: u64,
    target_hp: u64,
    target_mp: u64,
    discount_percent: u8,
) -> StatPrice {
    let hp = forward_cost(current_hp, target_hp, tables.costs.hp.tiers(), discount_percent);
    let mp = forward_cost(current_mp, target_mp, tables.costs.mp.tiers(), discount_percent);

    let exp_before = tables.experience.total_exp(current_hp, current_mp);
    let exp_after = tables
        .experience
        .total_exp(current_hp.max(target_hp), current_mp.max(target_mp));

    StatPrice {
        total_cost: hp.total_cost.saturating_add(mp.total_cost),
        hp,
        mp,
        exp_before,
        exp_after,
        rank_before: tables.ranks.rank_for(exp_before),
        rank_after: tables.ranks.rank_for(exp_after),
    }
}
