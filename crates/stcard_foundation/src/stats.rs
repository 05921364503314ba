//! Stat blocks: the seven-attribute numeric record on every card.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the seven attributes in a [`StatBlock`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Character level.
    Level,
    /// Strength (筋力).
    Strength,
    /// Endurance (耐久).
    Endurance,
    /// Agility (敏捷).
    Agility,
    /// Mana (魔力).
    Mana,
    /// Luck (幸运).
    Luck,
    /// Noble phantasm rating for servants, magic circuits for masters.
    NoblePhantasm,
}

impl Attribute {
    /// All attributes in card order.
    pub const ALL: [Self; 7] = [
        Self::Level,
        Self::Strength,
        Self::Endurance,
        Self::Agility,
        Self::Mana,
        Self::Luck,
        Self::NoblePhantasm,
    ];

    /// Position of this attribute in [`Attribute::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short English name, as used in field names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::Agility => "agility",
            Self::Mana => "mana",
            Self::Luck => "luck",
            Self::NoblePhantasm => "noblePhantasm",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Seven named integer attributes, all defaulting to 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct StatBlock {
    /// Level.
    pub level: i32,
    /// Strength.
    pub strength: i32,
    /// Endurance.
    pub endurance: i32,
    /// Agility.
    pub agility: i32,
    /// Mana.
    pub mana: i32,
    /// Luck.
    pub luck: i32,
    /// Noble phantasm (or magic circuit) rating.
    pub noble_phantasm: i32,
}

impl StatBlock {
    /// An all-zero stat block.
    pub const ZERO: Self = Self {
        level: 0,
        strength: 0,
        endurance: 0,
        agility: 0,
        mana: 0,
        luck: 0,
        noble_phantasm: 0,
    };

    /// Creates an all-zero stat block.
    #[must_use]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Returns the value of one attribute.
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Level => self.level,
            Attribute::Strength => self.strength,
            Attribute::Endurance => self.endurance,
            Attribute::Agility => self.agility,
            Attribute::Mana => self.mana,
            Attribute::Luck => self.luck,
            Attribute::NoblePhantasm => self.noble_phantasm,
        }
    }

    /// Sets the value of one attribute.
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        let slot = match attribute {
            Attribute::Level => &mut self.level,
            Attribute::Strength => &mut self.strength,
            Attribute::Endurance => &mut self.endurance,
            Attribute::Agility => &mut self.agility,
            Attribute::Mana => &mut self.mana,
            Attribute::Luck => &mut self.luck,
            Attribute::NoblePhantasm => &mut self.noble_phantasm,
        };
        *slot = value;
    }

    /// Builder-style variant of [`StatBlock::set`].
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: i32) -> Self {
        self.set(attribute, value);
        self
    }

    /// Iterates over `(attribute, value)` pairs in card order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// Returns true if every attribute is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for StatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (attribute, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{attribute}={value}")?;
            first = false;
        }
        Ok(())
    }
}
