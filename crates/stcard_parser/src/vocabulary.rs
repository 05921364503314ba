//! The fixed card vocabulary.
//!
//! Every keyword the parser understands lives here as `const` data: the stat
//! keyword tables, the numbered entry families and the boundary prefixes that
//! terminate multi-token values.

use stcard_foundation::Attribute;

/// Marker every card text must begin with.
pub const CARD_MARKER: &str = ".st";

/// Class label keyword.
pub const CLASS_KEY: &str = "职介";

/// Identifying code keyword.
pub const CODE_KEY: &str = "代号";

/// Class label written on every master card.
pub const MASTER_CLASS_NAME: &str = "御主";

/// Code used when a card names neither a code nor a class.
pub const UNKNOWN_CODE: &str = "unknown";

/// Highest slot number in a numbered entry family.
pub const MAX_ENTRIES: usize = 3;

/// Literal prefixes that start a new field.
///
/// A multi-token value ends where a token carrying one of these begins.
pub const BOUNDARY_PREFIXES: [&str; 11] = [
    "合计",
    "基础",
    "补正",
    "职介技能",
    "保有技能",
    "宝具",
    "工坊",
    "礼装",
    "职介",
    "代号",
    "等级",
];

/// Returns true if `token` starts a new field.
#[must_use]
pub fn is_boundary(token: &str) -> bool {
    BOUNDARY_PREFIXES.iter().any(|p| token.starts_with(p))
}

/// One of the three servant stat groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatGroup {
    /// 合计
    Aggregate,
    /// 基础
    Base,
    /// 补正
    Modifier,
}

impl StatGroup {
    /// All groups in key-triple order.
    pub const ALL: [Self; 3] = [Self::Aggregate, Self::Base, Self::Modifier];

    /// Position of this group within a [`StatKeys`] triple.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The aggregate, base and modifier keys for one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatKeys {
    /// The attribute these keys fill.
    pub attribute: Attribute,
    /// Keys in [`StatGroup`] order.
    pub keys: [&'static str; 3],
}

impl StatKeys {
    /// The key for `group`.
    #[must_use]
    pub const fn key(&self, group: StatGroup) -> &'static str {
        self.keys[group.index()]
    }
}

/// Servant stat keys, one row per attribute in [`Attribute::ALL`] order.
pub const SERVANT_STAT_KEYS: [StatKeys; 7] = [
    StatKeys {
        attribute: Attribute::Level,
        keys: ["合计等级", "基础等级", "补正等级"],
    },
    StatKeys {
        attribute: Attribute::Strength,
        keys: ["合计筋力", "基础筋力", "补正筋力"],
    },
    StatKeys {
        attribute: Attribute::Endurance,
        keys: ["合计耐久", "基础耐久", "补正耐久"],
    },
    StatKeys {
        attribute: Attribute::Agility,
        keys: ["合计敏捷", "基础敏捷", "补正敏捷"],
    },
    StatKeys {
        attribute: Attribute::Mana,
        keys: ["合计魔力", "基础魔力", "补正魔力"],
    },
    StatKeys {
        attribute: Attribute::Luck,
        keys: ["合计幸运", "基础幸运", "补正幸运"],
    },
    StatKeys {
        attribute: Attribute::NoblePhantasm,
        keys: ["合计宝具", "基础宝具", "补正宝具"],
    },
];

/// Master stat keys: per attribute, candidate keys tried in order.
///
/// Master cards write their level as a bare `等级` and their magic circuits
/// as `合计回路`; the servant-style aggregate key is accepted as a fallback.
pub const MASTER_STAT_KEYS: [(Attribute, &[&str]); 7] = [
    (Attribute::Level, &["等级", "合计等级"]),
    (Attribute::Strength, &["合计筋力"]),
    (Attribute::Endurance, &["合计耐久"]),
    (Attribute::Agility, &["合计敏捷"]),
    (Attribute::Mana, &["合计魔力"]),
    (Attribute::Luck, &["合计幸运"]),
    (Attribute::NoblePhantasm, &["合计回路", "合计宝具"]),
];

/// A family of numbered entry keys such as `职介技能1`..`职介技能3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryFamily {
    /// 职介技能
    ClassSkill,
    /// 保有技能
    PersonalSkill,
    /// 宝具
    NoblePhantasm,
    /// 工坊
    Workshop,
    /// 礼装
    CraftEssence,
}

impl EntryFamily {
    /// Every family.
    pub const ALL: [Self; 5] = [
        Self::ClassSkill,
        Self::PersonalSkill,
        Self::NoblePhantasm,
        Self::Workshop,
        Self::CraftEssence,
    ];

    /// The keyword stem, without slot number.
    #[must_use]
    pub const fn stem(self) -> &'static str {
        match self {
            Self::ClassSkill => "职介技能",
            Self::PersonalSkill => "保有技能",
            Self::NoblePhantasm => "宝具",
            Self::Workshop => "工坊",
            Self::CraftEssence => "礼装",
        }
    }

    /// The keyword for slot `n` (1-based).
    #[must_use]
    pub fn key(self, n: usize) -> String {
        format!("{}{n}", self.stem())
    }

    /// Keywords for every slot, `1..=MAX_ENTRIES`.
    pub fn keys(self) -> impl Iterator<Item = String> {
        (1..=MAX_ENTRIES).map(move |n| self.key(n))
    }
}

/// Every literal keyword a card may contain, for completion and highlighting.
#[must_use]
pub fn all_keywords() -> Vec<String> {
    let mut words: Vec<String> = vec![
        CARD_MARKER.to_string(),
        CLASS_KEY.to_string(),
        CODE_KEY.to_string(),
    ];
    for row in &SERVANT_STAT_KEYS {
        words.extend(row.keys.iter().map(ToString::to_string));
    }
    for (_, keys) in &MASTER_STAT_KEYS {
        for key in *keys {
            if !words.iter().any(|w| w == key) {
                words.push((*key).to_string());
            }
        }
    }
    for family in EntryFamily::ALL {
        words.extend(family.keys());
    }
    words
}
