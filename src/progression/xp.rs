//! Experience model
//!
//! Maps a raw stat value to the cumulative experience spent raising it.
//! Each stat has a quadratic potential `x * (x - offset) * multiplier`; tiers
//! with finer increments scale the potential by `base_increment / increment`,
//! so the same stat gain costs more experience the higher the stat climbs.
//!
//! Evaluation is closed-form per tier: the cost of any stat value is computed
//! by walking the handful of tiers, never the individual steps.

use serde::{Deserialize, Serialize};

use super::stat::StatType;

/// A half-open stat range `[min, max)` within which experience accrues in
/// fixed steps of `increment`. `max == None` marks the unbounded tail tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpTier {
    pub min: u64,
    pub max: Option<u64>,
    pub increment: u64,
}

impl ExpTier {
    pub fn new(min: u64, max: Option<u64>, increment: u64) -> Self {
        Self { min, max, increment }
    }

    /// Check if a stat value falls inside this tier
    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value < max)
    }

    /// Exclusive upper bound, `u64::MAX` for the tail tier
    pub fn end(&self) -> u64 {
        self.max.unwrap_or(u64::MAX)
    }
}

/// Experience curve for a single stat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpCurve {
    /// Quadratic offset (50 for HP, 25 for MP)
    pub offset: i64,
    /// Quadratic multiplier (5 for HP, 10 for MP)
    pub multiplier: i64,
    /// Reference increment the tier scaling is relative to
    pub base_increment: u64,
    /// Contiguous tiers, ascending, last one unbounded
    pub tiers: Vec<ExpTier>,
}

impl ExpCurve {
    /// `x * (x - offset) * multiplier`
    pub fn potential(&self, x: u64) -> i128 {
        let x = x as i128;
        x.saturating_mul(x - self.offset as i128)
            .saturating_mul(self.multiplier as i128)
    }

    /// Experience for moving from `from` to `to` at a given step increment.
    /// Negative spans (below the curve's offset) count as zero.
    pub(crate) fn span_exp(&self, from: u64, to: u64, increment: u64) -> i128 {
        if increment == 0 || to <= from {
            return 0;
        }
        let diff = self.potential(to).saturating_sub(self.potential(from));
        (diff.saturating_mul(self.base_increment as i128) / increment as i128).max(0)
    }

    /// Find the tier governing a stat value.
    ///
    /// Values past every finite tier resolve to the tail tier, values below the
    /// first tier resolve to the first tier.
    pub fn tier_at(&self, value: u64) -> Option<&ExpTier> {
        self.tiers.iter().find(|t| t.contains(value)).or_else(|| {
            match self.tiers.first() {
                Some(first) if value < first.min => Some(first),
                _ => self.tiers.last(),
            }
        })
    }

    /// Step size of the tier containing `value`
    pub fn increment_at(&self, value: u64) -> u64 {
        self.tier_at(value)
            .map_or(self.base_increment, |tier| tier.increment)
    }

    /// Cumulative experience represented by a stat value.
    ///
    /// Only whole steps count: within each tier the overlap with `[0, value)`
    /// is floored to a multiple of the tier's increment.
    pub fn cumulative_exp(&self, value: u64) -> u64 {
        let mut total: i128 = 0;

        for tier in &self.tiers {
            if value <= tier.min {
                break;
            }
            if tier.increment == 0 {
                continue;
            }
            let end = tier.max.map_or(value, |max| max.min(value));
            // Reversed tiers contribute nothing
            let Some(span) = end.checked_sub(tier.min) else {
                continue;
            };
            let steps = span / tier.increment;
            let reached = tier.min + steps * tier.increment;
            total = total.saturating_add(self.span_exp(tier.min, reached, tier.increment));
        }

        saturate_exp(total)
    }

    /// Experience gained by raising a stat from `from` to `to`.
    ///
    /// The rise in cumulative experience, so a step crossing a tier boundary is
    /// charged at both tiers' rates and partial steps round the same way.
    pub fn step_exp(&self, from: u64, to: u64) -> u64 {
        if to <= from {
            return 0;
        }
        self.cumulative_exp(to).saturating_sub(self.cumulative_exp(from))
    }
}

/// Experience curves for both stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceModel {
    pub hp: ExpCurve,
    pub mp: ExpCurve,
}

impl ExperienceModel {
    pub fn curve(&self, stat: StatType) -> &ExpCurve {
        match stat {
            StatType::Hp => &self.hp,
            StatType::Mp => &self.mp,
        }
    }

    /// Cumulative experience for one stat value
    pub fn cumulative_exp(&self, stat: StatType, value: u64) -> u64 {
        self.curve(stat).cumulative_exp(value)
    }

    /// Step size of the tier containing `value`
    pub fn increment_at(&self, stat: StatType, value: u64) -> u64 {
        self.curve(stat).increment_at(value)
    }

    /// Combined experience of an HP/MP pair
    pub fn total_exp(&self, hp: u64, mp: u64) -> u64 {
        self.cumulative_exp(StatType::Hp, hp)
            .saturating_add(self.cumulative_exp(StatType::Mp, mp))
    }
}

pub(crate) fn saturate_exp(value: i128) -> u64 {
    if value <= 0 {
        0
    } else {
        u64::try_from(value).unwrap_or(u64::MAX)
    }
}
