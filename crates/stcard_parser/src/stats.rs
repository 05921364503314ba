//! Stat block assembly.

use stcard_foundation::StatBlock;

use crate::locator::FieldLocator;
use crate::vocabulary::{MASTER_STAT_KEYS, SERVANT_STAT_KEYS, StatGroup};

/// Coerces a looked-up stat value to an integer.
///
/// Missing, empty and non-numeric values become 0.
#[must_use]
pub fn coerce_int(value: Option<&str>) -> i32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Builds one servant stat block from the keys of `group`.
#[must_use]
pub fn build_stats(locator: &FieldLocator<'_>, group: StatGroup) -> StatBlock {
    let mut stats = StatBlock::new();
    for row in &SERVANT_STAT_KEYS {
        stats.set(row.attribute, coerce_int(locator.scalar(row.key(group))));
    }
    stats
}

/// Builds the single master stat block.
///
/// For each attribute the first candidate key followed by a value wins.
#[must_use]
pub fn build_master_stats(locator: &FieldLocator<'_>) -> StatBlock {
    let mut stats = StatBlock::new();
    for (attribute, keys) in &MASTER_STAT_KEYS {
        let value = keys.iter().find_map(|k| locator.scalar(k));
        stats.set(*attribute, coerce_int(value));
    }
    stats
}
