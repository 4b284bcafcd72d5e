//! Stat types
//!
//! The two raw character statistics that feed the experience model.

use serde::{Deserialize, Serialize};

/// A purchasable character statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    /// Health points
    Hp,
    /// Mana points
    Mp,
}

impl StatType {
    pub const ALL: [StatType; 2] = [StatType::Hp, StatType::Mp];

    pub fn name(&self) -> &'static str {
        match self {
            StatType::Hp => "HP",
            StatType::Mp => "MP",
        }
    }
}

impl std::fmt::Display for StatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
