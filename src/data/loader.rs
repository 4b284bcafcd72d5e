//! RON table loader
//!
//! Loads game tables from an external RON file, with fallback to the built-in
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::defaults::default_tables;
use super::error::{Result, TableError};
use crate::economy::{CostTables, RarTier};
use crate::planner::StatRatio;
use crate::progression::{CapacityTable, ExpCurve, ExperienceModel, RankTable};

/// Format version written into every tables file
pub const TABLES_VERSION: u32 = 1;

static BUILTIN: OnceLock<GameTables> = OnceLock::new();

/// Every static table the engine reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameTables {
    pub version: u32,
    pub experience: ExperienceModel,
    pub ranks: RankTable,
    pub capacities: CapacityTable,
    pub costs: CostTables,
    /// HP:MP split for target plans that raise both stats
    pub both_ratio: StatRatio,
}

impl Default for GameTables {
    fn default() -> Self {
        default_tables()
    }
}

impl GameTables {
    /// Built-in tables, built on first use
    pub fn builtin() -> &'static GameTables {
        BUILTIN.get_or_init(default_tables)
    }

    /// Read, parse and validate a tables file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::from_ron_str(&content)?;
        log::info!("Tables loaded from {:?}", path);
        Ok(tables)
    }

    pub fn from_ron_str(content: &str) -> Result<Self> {
        let tables: GameTables = ron::from_str(content)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load `path` if it exists, otherwise (or on any error) use the built-in tables
    pub fn load_or_builtin(path: &Path) -> GameTables {
        if !path.exists() {
            log::debug!("No tables at {:?}, using built-in tables", path);
            return Self::builtin().clone();
        }
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Failed to load tables: {}. Using built-in tables.", e);
            Self::builtin().clone()
        })
    }

    /// Write the tables as pretty RON, creating parent directories
    pub fn export(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| TableError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, content).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Tables exported to {:?}", path);
        Ok(())
    }

    /// Default location of the override file
    pub fn default_path() -> PathBuf {
        use directories::ProjectDirs;

        if let Some(proj_dirs) = ProjectDirs::from("com", "dansu", "Dansu") {
            let mut path = proj_dirs.config_dir().to_path_buf();
            path.push("tables.ron");
            path
        } else {
            PathBuf::from("./tables.ron")
        }
    }

    /// Check every table is usable by the engine
    pub fn validate(&self) -> Result<()> {
        if self.version != TABLES_VERSION {
            return Err(TableError::UnsupportedVersion {
                expected: TABLES_VERSION,
                found: self.version,
            });
        }

        validate_curve("hp experience", &self.experience.hp)?;
        validate_curve("mp experience", &self.experience.mp)?;
        validate_costs("hp costs", self.costs.hp.tiers())?;
        validate_costs("mp costs", self.costs.mp.tiers())?;
        self.validate_ranks()?;

        if !self.both_ratio.is_valid() {
            return Err(TableError::InvalidRatio);
        }
        Ok(())
    }

    fn validate_ranks(&self) -> Result<()> {
        let entries = self.ranks.entries();
        if entries.is_empty() {
            return Err(TableError::EmptyTable { table: "ranks" });
        }
        if let Some(index) = (1..entries.len())
            .find(|&i| entries[i].exp_threshold <= entries[i - 1].exp_threshold)
        {
            return Err(TableError::UnsortedRanks { index });
        }
        for entry in entries {
            match self.capacities.capacity_for(entry.rank) {
                None => return Err(TableError::MissingCapacity { rank: entry.rank }),
                Some(cap) if cap < entry.exp_threshold => {
                    return Err(TableError::CapacityBelowThreshold { rank: entry.rank })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Shape shared by experience and cost tiers: non-empty ranges, contiguous,
/// positive increments, unbounded last tier only
fn validate_ranges(table: &'static str, ranges: &[(u64, Option<u64>, u64)]) -> Result<()> {
    let Some(last) = ranges.last() else {
        return Err(TableError::EmptyTable { table });
    };
    if last.1.is_some() {
        return Err(TableError::BoundedTail { table });
    }

    for (index, &(min, max, increment)) in ranges.iter().enumerate() {
        if increment == 0 {
            return Err(TableError::ZeroIncrement { table, index });
        }
        if max.is_some_and(|max| max <= min) {
            return Err(TableError::UnsortedTiers { table, index });
        }
        if index > 0 && ranges[index - 1].1 != Some(min) {
            return Err(TableError::GapInTiers { table, index });
        }
    }
    Ok(())
}

fn validate_curve(table: &'static str, curve: &ExpCurve) -> Result<()> {
    let ranges: Vec<_> = curve.tiers.iter().map(|t| (t.min, t.max, t.increment)).collect();
    validate_ranges(table, &ranges)?;

    if curve.base_increment == 0 {
        return Err(TableError::ZeroIncrement { table, index: 0 });
    }
    if curve.multiplier <= 0 {
        return Err(TableError::NegativeMarginal { table, index: 0 });
    }

    for (index, tier) in curve.tiers.iter().enumerate() {
        if curve.base_increment % tier.increment != 0 {
            return Err(TableError::IncrementNotDivisor {
                table,
                index,
                increment: tier.increment,
                base: curve.base_increment,
            });
        }
        // First step of the tier: 2*min + increment must reach the offset
        let lead = 2 * i128::from(tier.min) + i128::from(tier.increment);
        if lead < i128::from(curve.offset) {
            return Err(TableError::NegativeMarginal { table, index });
        }
    }
    Ok(())
}

fn validate_costs(table: &'static str, tiers: &[RarTier]) -> Result<()> {
    let ranges: Vec<_> = tiers.iter().map(|t| (t.min, t.max, t.increment)).collect();
    validate_ranges(table, &ranges)
}
