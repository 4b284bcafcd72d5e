//! Caller input normalisation
//!
//! Raw numbers from the command line or any other caller are clamped into the
//! domain the engine works in. Nothing here fails.

use crate::economy::MAX_DISCOUNT_PERCENT;

/// Largest stat value accepted from callers, also the target-search ceiling
pub const MAX_STAT: u64 = 1_000_000_000;

/// Negative values become 0, values past `MAX_STAT` are capped
pub fn clamp_stat(value: i64) -> u64 {
    (value.max(0) as u64).min(MAX_STAT)
}

/// Same as `clamp_stat` for fractional input; NaN counts as 0
pub fn clamp_stat_f64(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= MAX_STAT as f64 {
        MAX_STAT
    } else {
        value.floor() as u64
    }
}

/// Rar and experience budgets: negative means nothing to spend
pub fn clamp_budget(value: i64) -> u64 {
    value.max(0) as u64
}

pub fn clamp_discount(percent: i64) -> u8 {
    percent.clamp(0, i64::from(MAX_DISCOUNT_PERCENT)) as u8
}
