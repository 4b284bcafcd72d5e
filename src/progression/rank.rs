//! Rank (dansu) resolution
//!
//! Cumulative experience maps onto a sorted table of rank thresholds, plus a
//! separate table holding the experience ceiling of each rank.

use serde::{Deserialize, Serialize};

/// Rank reported for empty or malformed tables
pub const FLOOR_RANK: u32 = 0;

/// A rank and the cumulative experience needed to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub rank: u32,
    pub exp_threshold: u64,
}

/// Where a given amount of experience lands in the rank table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankStatus {
    pub rank: u32,
    /// False for the pre-first-rank sentinel and for unusable tables
    pub ranked: bool,
    pub current_threshold: u64,
    /// None at the top rank
    pub next_threshold: Option<u64>,
    /// Progress toward the next threshold, 0..=100
    pub progress_percent: f64,
}

impl RankStatus {
    /// Sentinel for tables that cannot be used
    pub fn floor() -> Self {
        Self {
            rank: FLOOR_RANK,
            ranked: false,
            current_threshold: 0,
            next_threshold: None,
            progress_percent: 0.0,
        }
    }

    /// Experience still missing to reach the next rank
    pub fn exp_to_next(&self, total_exp: u64) -> Option<u64> {
        self.next_threshold.map(|next| next.saturating_sub(total_exp))
    }
}

/// Rank thresholds, ascending
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankTable {
    entries: Vec<RankEntry>,
}

impl RankTable {
    pub fn new(entries: Vec<RankEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Thresholds must be strictly increasing
    pub fn is_well_formed(&self) -> bool {
        !self.entries.is_empty()
            && self
                .entries
                .windows(2)
                .all(|pair| pair[0].exp_threshold < pair[1].exp_threshold)
    }

    /// Threshold of a specific rank
    pub fn threshold_for(&self, rank: u32) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.rank == rank)
            .map(|e| e.exp_threshold)
    }

    /// Resolve cumulative experience to a rank.
    ///
    /// A value exactly on a threshold belongs to that threshold's rank.
    pub fn rank_for(&self, total_exp: u64) -> RankStatus {
        if !self.is_well_formed() {
            return RankStatus::floor();
        }
        let first = self.entries[0];

        // Scan from the top threshold down, take the first one we have reached
        let Some(idx) = self.entries.iter().rposition(|e| e.exp_threshold <= total_exp) else {
            return RankStatus {
                rank: first.rank.saturating_sub(1),
                ranked: false,
                current_threshold: 0,
                next_threshold: Some(first.exp_threshold),
                progress_percent: progress(total_exp, 0, first.exp_threshold),
            };
        };

        let current = self.entries[idx];
        let next = self.entries.get(idx + 1).map(|e| e.exp_threshold);
        RankStatus {
            rank: current.rank,
            ranked: true,
            current_threshold: current.exp_threshold,
            next_threshold: next,
            progress_percent: next.map_or(100.0, |next| {
                progress(total_exp, current.exp_threshold, next)
            }),
        }
    }
}

fn progress(value: u64, from: u64, to: u64) -> f64 {
    if to <= from {
        return 100.0;
    }
    let pct = value.saturating_sub(from) as f64 / (to - from) as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

/// Maximum cumulative experience a rank can hold before the next rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankCapacity {
    pub rank: u32,
    pub max_exp: u64,
}

/// Rank ceilings, kept apart from the thresholds so they can be tuned alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapacityTable {
    entries: Vec<RankCapacity>,
}

impl CapacityTable {
    pub fn new(entries: Vec<RankCapacity>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RankCapacity] {
        &self.entries
    }

    /// Experience ceiling of a rank
    pub fn capacity_for(&self, rank: u32) -> Option<u64> {
        self.entries
            .iter()
            .find(|c| c.rank == rank)
            .map(|c| c.max_exp)
    }

    /// Derive ceilings from thresholds: one below the next rank, and for the
    /// top rank one full rank-width above its threshold. Empty when the
    /// thresholds are not strictly increasing.
    pub fn from_thresholds(ranks: &RankTable) -> Self {
        if !ranks.is_well_formed() {
            return Self::default();
        }
        let entries = ranks.entries();
        let capacities = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let max_exp = match entries.get(i + 1) {
                    Some(next) => next.exp_threshold.saturating_sub(1),
                    None => {
                        let width = i
                            .checked_sub(1)
                            .map(|p| entry.exp_threshold - entries[p].exp_threshold)
                            .unwrap_or(entry.exp_threshold);
                        entry.exp_threshold.saturating_add(width).saturating_sub(1)
                    }
                };
                RankCapacity { rank: entry.rank, max_exp: max_exp.max(entry.exp_threshold) }
            })
            .collect();
        Self { entries: capacities }
    }
}
