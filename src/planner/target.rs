//! Target rank search
//!
//! Finds the smallest stat increase whose combined experience reaches a
//! chosen rank, then prices it in Rar. Cumulative experience never decreases
//! as either stat grows, so the increase can be bisected.

use serde::{Deserialize, Serialize};

use crate::data::GameTables;
use crate::economy::{forward_cost, CostBreakdown};
use crate::input::MAX_STAT;
use crate::progression::RankEntry;

/// Which stats a target-rank plan may raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocationPolicy {
    HpOnly,
    MpOnly,
    /// Both stats, split by the configured ratio
    Both,
}

impl AllocationPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            AllocationPolicy::HpOnly => "hp-only",
            AllocationPolicy::MpOnly => "mp-only",
            AllocationPolicy::Both => "both",
        }
    }
}

/// HP:MP proportion for `AllocationPolicy::Both`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRatio {
    pub hp: u32,
    pub mp: u32,
}

impl StatRatio {
    pub fn is_valid(&self) -> bool {
        self.hp > 0 && self.mp > 0
    }
}

/// Stats that reach a requested rank and what they cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPlan {
    pub requested_rank: u32,
    /// Rank actually searched for once the request is matched to the table
    pub rank: u32,
    pub exp_threshold: u64,
    pub policy: AllocationPolicy,
    /// False when no stats up to the search cap reach the threshold
    pub reachable: bool,
    pub current_hp: u64,
    pub current_mp: u64,
    pub target_hp: u64,
    pub target_mp: u64,
    pub exp_before: u64,
    pub exp_after: u64,
    pub hp_cost: CostBreakdown,
    pub mp_cost: CostBreakdown,
    pub total_cost: u64,
}

/// Minimal stats reaching `rank` under `policy`, priced with the Rar tables
pub fn plan_target_rank(
    tables: &GameTables,
    current_hp: u64,
    current_mp: u64,
    rank: u32,
    policy: AllocationPolicy,
    discount_percent: u8,
) -> TargetPlan {
    let exp_before = tables.experience.total_exp(current_hp, current_mp);
    let mut plan = TargetPlan {
        requested_rank: rank,
        rank,
        exp_threshold: 0,
        policy,
        reachable: false,
        current_hp,
        current_mp,
        target_hp: current_hp,
        target_mp: current_mp,
        exp_before,
        exp_after: exp_before,
        hp_cost: CostBreakdown::unchanged(current_hp),
        mp_cost: CostBreakdown::unchanged(current_mp),
        total_cost: 0,
    };

    let Some(entry) = resolve_rank(tables.ranks.entries(), rank) else {
        log::debug!("target: empty rank table");
        return plan;
    };
    plan.rank = entry.rank;
    plan.exp_threshold = entry.exp_threshold;

    let ratio = tables.both_ratio;
    let stats_at = |t: u64| raise(current_hp, current_mp, t, policy, ratio);
    let exp_at = |t: u64| {
        let (hp, mp) = stats_at(t);
        tables.experience.total_exp(hp, mp)
    };

    let Some(t) = min_raise(entry.exp_threshold, exp_at) else {
        log::debug!("target: rank {} unreachable with {}", entry.rank, policy.name());
        return plan;
    };

    let (target_hp, target_mp) = stats_at(t);
    let hp_cost = forward_cost(current_hp, target_hp, tables.costs.hp.tiers(), discount_percent);
    let mp_cost = forward_cost(current_mp, target_mp, tables.costs.mp.tiers(), discount_percent);

    plan.reachable = true;
    plan.target_hp = target_hp;
    plan.target_mp = target_mp;
    plan.exp_after = tables.experience.total_exp(target_hp, target_mp);
    plan.total_cost = hp_cost.total_cost.saturating_add(mp_cost.total_cost);
    plan.hp_cost = hp_cost;
    plan.mp_cost = mp_cost;

    log::debug!(
        "target: rank {} via {} -> hp {} mp {} for {} Rar",
        plan.rank,
        policy.name(),
        target_hp,
        target_mp,
        plan.total_cost
    );
    plan
}

/// First entry at or above the requested rank, else the top entry
fn resolve_rank(entries: &[RankEntry], rank: u32) -> Option<RankEntry> {
    entries
        .iter()
        .find(|e| e.rank >= rank)
        .or_else(|| entries.last())
        .copied()
}

/// Stats after raising by `t` units under a policy, capped at `MAX_STAT`
fn raise(hp: u64, mp: u64, t: u64, policy: AllocationPolicy, ratio: StatRatio) -> (u64, u64) {
    let (hp_share, mp_share) = match policy {
        AllocationPolicy::HpOnly => (1, 0),
        AllocationPolicy::MpOnly => (0, 1),
        AllocationPolicy::Both => (u64::from(ratio.hp), u64::from(ratio.mp)),
    };
    let grow = |value: u64, share: u64| {
        if share == 0 {
            value
        } else {
            value.saturating_add(t.saturating_mul(share)).min(MAX_STAT.max(value))
        }
    };
    (grow(hp, hp_share), grow(mp, mp_share))
}

/// Smallest `t` in `[0, MAX_STAT]` with `exp_at(t) >= threshold`
fn min_raise(threshold: u64, exp_at: impl Fn(u64) -> u64) -> Option<u64> {
    if exp_at(0) >= threshold {
        return Some(0);
    }
    if exp_at(MAX_STAT) < threshold {
        return None;
    }

    // exp_at(lo) misses, exp_at(hi) reaches
    let (mut lo, mut hi) = (0u64, MAX_STAT);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if exp_at(mid) >= threshold {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some(hi)
}
