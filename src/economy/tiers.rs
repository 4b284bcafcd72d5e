//! Rar cost tiers
//!
//! Piecewise schedule of what one upgrade step costs in Rar. These tiers
//! partition the stat axis independently of the experience tiers.

use serde::{Deserialize, Serialize};

use crate::progression::StatType;

/// A half-open stat range `[min, max)` with a fixed Rar cost per
/// `increment`-sized upgrade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarTier {
    pub min: u64,
    pub max: Option<u64>,
    pub increment: u64,
    pub cost_per_upgrade: u64,
    pub label: String,
}

impl RarTier {
    pub fn new(min: u64, max: Option<u64>, increment: u64, cost_per_upgrade: u64, label: &str) -> Self {
        Self { min, max, increment, cost_per_upgrade, label: label.to_string() }
    }

    /// Check if a stat value falls inside this tier
    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value < max)
    }

    /// Exclusive upper bound, `u64::MAX` for the tail tier
    pub fn end(&self) -> u64 {
        self.max.unwrap_or(u64::MAX)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Upgrades needed to cover `gain`; a partial step is a full upgrade
    pub fn upgrades_for(&self, gain: u64) -> u64 {
        if self.increment == 0 {
            0
        } else {
            gain.div_ceil(self.increment)
        }
    }
}

/// Ordered Rar tiers for one stat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostTierTable {
    tiers: Vec<RarTier>,
}

impl CostTierTable {
    pub fn new(tiers: Vec<RarTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[RarTier] {
        &self.tiers
    }

    /// Lowest stat value the table can price
    pub fn floor(&self) -> Option<u64> {
        self.tiers.first().map(|t| t.min)
    }

    pub fn tier_at(&self, value: u64) -> Option<&RarTier> {
        self.tiers.iter().find(|t| t.contains(value))
    }
}

/// Rar tiers for both stats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTables {
    pub hp: CostTierTable,
    pub mp: CostTierTable,
}

impl CostTables {
    pub fn table(&self, stat: StatType) -> &CostTierTable {
        match stat {
            StatType::Hp => &self.hp,
            StatType::Mp => &self.mp,
        }
    }
}

/// Clamp a stat value up to the table's floor
pub(crate) fn clamp_to_floor(value: u64, tiers: &[RarTier]) -> u64 {
    tiers.first().map_or(value, |first| value.max(first.min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrades_round_up() {
        let tier = RarTier::new(0, Some(1_000), 100, 3, "test");
        assert_eq!(tier.upgrades_for(0), 0);
        assert_eq!(tier.upgrades_for(1), 1);
        assert_eq!(tier.upgrades_for(100), 1);
        assert_eq!(tier.upgrades_for(101), 2);
        assert!(tier.contains(999));
        assert!(!tier.contains(1_000));
    }

    #[test]
    fn test_floor_and_lookup() {
        let table = CostTierTable::new(vec![
            RarTier::new(500, Some(1_000), 100, 1, "low"),
            RarTier::new(1_000, None, 10, 1, "high"),
        ]);
        assert_eq!(table.floor(), Some(500));
        assert_eq!(clamp_to_floor(20, table.tiers()), 500);
        assert_eq!(clamp_to_floor(700, table.tiers()), 700);
        assert_eq!(table.tier_at(5_000_000).map(|t| t.label.as_str()), Some("high"));
        assert!(table.tier_at(10).is_none());
        assert_eq!(CostTierTable::default().floor(), None);
    }
}
