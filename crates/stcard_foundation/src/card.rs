//! Character card records produced by the parser.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stats::StatBlock;

/// The two card variants.
///
/// The set is closed: unknown tags are rejected by [`CardType::from_str`]
/// instead of falling back to a servant card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CardType {
    /// Primary combatant card (从者人物卡).
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "PRIMARY"))]
    Servant,
    /// Controller card (御主角色卡).
    #[cfg_attr(feature = "serde", serde(alias = "CONTROLLER"))]
    Master,
}

impl CardType {
    /// Wire tag, as stored by downstream collaborators.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Servant => "SERVANT",
            Self::Master => "MASTER",
        }
    }

    /// Display label in the card vocabulary.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Servant => "从者",
            Self::Master => "御主",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CardType {
    type Err = Error;

    /// Accepts `SERVANT`/`PRIMARY` and `MASTER`/`CONTROLLER`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SERVANT" | "PRIMARY" => Ok(Self::Servant),
            "MASTER" | "CONTROLLER" => Ok(Self::Master),
            _ => Err(Error::unknown_card_type(s)),
        }
    }
}

/// A technique, workshop or item entry.
///
/// The parser only fills `name`; `rank` and `description` are left empty for
/// later enrichment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedEntry {
    /// Entry name.
    pub name: String,
    /// Rank, e.g. `A+`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rank: String,
    /// Free-form description.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "desc", alias = "description")
    )]
    pub description: String,
}

impl NamedEntry {
    /// Creates an entry with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rank: String::new(),
            description: String::new(),
        }
    }
}

/// Where a record's base stats live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseStats {
    /// Base stats were read from the card.
    Own(StatBlock),
    /// Base stats are the total stats (master cards carry no separate base group).
    SameAsTotal,
}

/// A parsed character card.
///
/// Equality compares the stats a caller sees through [`CardRecord::base`],
/// not whether the base block is an alias.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "wire::CardRecordRepr", from = "wire::CardRecordRepr")
)]
pub struct CardRecord {
    /// Identifying code (代号).
    pub code: String,
    /// Class or role label (职介).
    pub class_name: String,
    /// The trimmed source text.
    pub raw_text: String,
    /// Which variant this card is.
    pub card_type: CardType,
    /// Aggregate stats (合计).
    pub total_stats: StatBlock,
    /// Base stats (基础); see [`CardRecord::base`].
    pub base_stats: BaseStats,
    /// Modifier stats (补正).
    pub correction_stats: StatBlock,
    /// Class-granted skills (职介技能).
    pub class_skills: Vec<NamedEntry>,
    /// Personal skills (保有技能).
    pub personal_skills: Vec<NamedEntry>,
    /// Noble phantasms (宝具); servant cards only.
    pub noble_phantasms: Vec<NamedEntry>,
    /// Workshops (工坊); `None` on servant cards.
    pub workshops: Option<Vec<NamedEntry>>,
    /// Craft essences (礼装); `None` on servant cards.
    pub craft_essences: Option<Vec<NamedEntry>>,
}

impl CardRecord {
    /// Returns the base stats, resolving the alias to the total stats.
    #[must_use]
    pub const fn base(&self) -> &StatBlock {
        match &self.base_stats {
            BaseStats::Own(stats) => stats,
            BaseStats::SameAsTotal => &self.total_stats,
        }
    }

    /// Mutable access to the base stats.
    ///
    /// On an aliased record this is the total stat block.
    pub fn base_mut(&mut self) -> &mut StatBlock {
        match &mut self.base_stats {
            BaseStats::Own(stats) => stats,
            BaseStats::SameAsTotal => &mut self.total_stats,
        }
    }

    /// Returns true if base stats alias the total stats.
    #[must_use]
    pub const fn shares_base_stats(&self) -> bool {
        matches!(self.base_stats, BaseStats::SameAsTotal)
    }

    /// Replaces an alias with an owned copy of the current total stats.
    ///
    /// A detached master card still equals its aliased form until one block
    /// changes; reading it back from JSON restores the alias.
    pub fn detach_base_stats(&mut self) {
        if self.shares_base_stats() {
            self.base_stats = BaseStats::Own(self.total_stats);
        }
    }

    /// Total number of named entries across every list.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.class_skills.len()
            + self.personal_skills.len()
            + self.noble_phantasms.len()
            + self.workshops.as_ref().map_or(0, Vec::len)
            + self.craft_essences.as_ref().map_or(0, Vec::len)
    }
}

impl PartialEq for CardRecord {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.class_name == other.class_name
            && self.raw_text == other.raw_text
            && self.card_type == other.card_type
            && self.total_stats == other.total_stats
            && self.base() == other.base()
            && self.correction_stats == other.correction_stats
            && self.class_skills == other.class_skills
            && self.personal_skills == other.personal_skills
            && self.noble_phantasms == other.noble_phantasms
            && self.workshops == other.workshops
            && self.craft_essences == other.craft_essences
    }
}

impl Eq for CardRecord {}

#[cfg(feature = "serde")]
mod wire {
    use serde::{Deserialize, Serialize};

    use super::{BaseStats, CardRecord, CardType, NamedEntry};
    use crate::stats::StatBlock;

    /// Flat JSON shape with base stats written out in full.
    #[derive(Clone, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct CardRecordRepr {
        code: String,
        class_name: String,
        raw_text: String,
        card_type: CardType,
        #[serde(default)]
        total_stats: StatBlock,
        #[serde(default)]
        base_stats: StatBlock,
        #[serde(default)]
        correction_stats: StatBlock,
        #[serde(default)]
        class_skills: Vec<NamedEntry>,
        #[serde(default)]
        personal_skills: Vec<NamedEntry>,
        #[serde(default)]
        noble_phantasms: Vec<NamedEntry>,
        #[serde(default)]
        workshops: Option<Vec<NamedEntry>>,
        #[serde(default)]
        craft_essences: Option<Vec<NamedEntry>>,
    }

    impl From<CardRecord> for CardRecordRepr {
        fn from(record: CardRecord) -> Self {
            let base_stats = *record.base();
            Self {
                code: record.code,
                class_name: record.class_name,
                raw_text: record.raw_text,
                card_type: record.card_type,
                total_stats: record.total_stats,
                base_stats,
                correction_stats: record.correction_stats,
                class_skills: record.class_skills,
                personal_skills: record.personal_skills,
                noble_phantasms: record.noble_phantasms,
                workshops: record.workshops,
                craft_essences: record.craft_essences,
            }
        }
    }

    impl From<CardRecordRepr> for CardRecord {
        fn from(repr: CardRecordRepr) -> Self {
            let base_stats =
                if repr.card_type == CardType::Master && repr.base_stats == repr.total_stats {
                    BaseStats::SameAsTotal
                } else {
                    BaseStats::Own(repr.base_stats)
                };
            Self {
                code: repr.code,
                class_name: repr.class_name,
                raw_text: repr.raw_text,
                card_type: repr.card_type,
                total_stats: repr.total_stats,
                base_stats,
                correction_stats: repr.correction_stats,
                class_skills: repr.class_skills,
                personal_skills: repr.personal_skills,
                noble_phantasms: repr.noble_phantasms,
                workshops: repr.workshops,
                craft_essences: repr.craft_essences,
            }
        }
    }
}
