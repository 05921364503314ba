//! Record assembly for the two card variants.

use stcard_foundation::{BaseStats, CardRecord, CardType, NamedEntry, StatBlock};

use crate::locator::FieldLocator;
use crate::stats::{build_master_stats, build_stats};
use crate::vocabulary::{
    CLASS_KEY, CODE_KEY, EntryFamily, MASTER_CLASS_NAME, StatGroup, UNKNOWN_CODE,
};

/// Collects the entries of one numbered family, skipping empty slots.
#[must_use]
pub fn collect_entries(locator: &FieldLocator<'_>, family: EntryFamily) -> Vec<NamedEntry> {
    family
        .keys()
        .filter_map(|key| locator.span(&key))
        .map(NamedEntry::named)
        .collect()
}

/// Assembles a servant card.
///
/// `raw_text` is the already-trimmed source text.
#[must_use]
pub fn assemble_servant(locator: &FieldLocator<'_>, raw_text: &str) -> CardRecord {
    let class_name = locator.span(CLASS_KEY).unwrap_or_default();
    let code = locator
        .scalar(CODE_KEY)
        .map(str::to_string)
        .or_else(|| (!class_name.is_empty()).then(|| class_name.clone()))
        .unwrap_or_else(|| UNKNOWN_CODE.to_string());

    CardRecord {
        code,
        class_name,
        raw_text: raw_text.to_string(),
        card_type: CardType::Servant,
        total_stats: build_stats(locator, StatGroup::Aggregate),
        base_stats: BaseStats::Own(build_stats(locator, StatGroup::Base)),
        correction_stats: build_stats(locator, StatGroup::Modifier),
        class_skills: collect_entries(locator, EntryFamily::ClassSkill),
        personal_skills: collect_entries(locator, EntryFamily::PersonalSkill),
        noble_phantasms: collect_entries(locator, EntryFamily::NoblePhantasm),
        workshops: None,
        craft_essences: None,
    }
}

/// Assembles a master card.
///
/// Masters carry only aggregate stats, so the base stats alias them and the
/// correction stats are zero.
#[must_use]
pub fn assemble_master(locator: &FieldLocator<'_>, raw_text: &str) -> CardRecord {
    let code = locator
        .span(CODE_KEY)
        .unwrap_or_else(|| UNKNOWN_CODE.to_string());

    CardRecord {
        code,
        class_name: MASTER_CLASS_NAME.to_string(),
        raw_text: raw_text.to_string(),
        card_type: CardType::Master,
        total_stats: build_master_stats(locator),
        base_stats: BaseStats::SameAsTotal,
        correction_stats: StatBlock::ZERO,
        class_skills: Vec::new(),
        personal_skills: collect_entries(locator, EntryFamily::PersonalSkill),
        noble_phantasms: Vec::new(),
        workshops: Some(collect_entries(locator, EntryFamily::Workshop)),
        craft_essences: Some(collect_entries(locator, EntryFamily::CraftEssence)),
    }
}
