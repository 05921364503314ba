//! Session state for the REPL.
//!
//! The session holds the current card type and every card parsed so far.
//! Cards are numbered from 1 in the order they were added.

use stcard_foundation::{CardRecord, CardType, Error, ErrorKind, Result};
use stcard_parser::parse;
use tracing::debug;

/// An in-memory roster of parsed cards.
#[derive(Debug, Default)]
pub struct Session {
    /// Card type applied to newly ingested text.
    card_type: CardType,

    /// Parsed cards in load order.
    cards: Vec<CardRecord>,
}

impl Session {
    /// Creates an empty session parsing servant cards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial card type.
    #[must_use]
    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.card_type = card_type;
        self
    }

    /// The card type applied to newly ingested text.
    #[must_use]
    pub const fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Changes the card type for subsequent cards.
    pub fn set_card_type(&mut self, card_type: CardType) {
        self.card_type = card_type;
    }

    /// Parses `text` with the current card type and adds it to the roster.
    ///
    /// Returns the new card's number.
    ///
    /// # Errors
    ///
    /// Returns the parse error; the roster is unchanged.
    pub fn ingest(&mut self, text: &str) -> Result<usize> {
        let record = parse(text, self.card_type)?;
        Ok(self.add(record))
    }

    /// Adds an already parsed card and returns its number.
    pub fn add(&mut self, record: CardRecord) -> usize {
        debug!(code = %record.code, card_type = %record.card_type, "added card to session");
        self.cards.push(record);
        self.cards.len()
    }

    /// Returns the card with the given number.
    ///
    /// # Errors
    ///
    /// Returns `CardNotFound` if no card has that number.
    pub fn get(&self, number: usize) -> Result<&CardRecord> {
        number
            .checked_sub(1)
            .and_then(|i| self.cards.get(i))
            .ok_or_else(|| {
                Error::new(ErrorKind::CardNotFound {
                    index: number,
                    count: self.cards.len(),
                })
            })
    }

    /// All cards in load order.
    #[must_use]
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    /// Numbered cards whose code or class name contains `keyword`,
    /// ignoring case.
    #[must_use]
    pub fn find(&self, keyword: &str) -> Vec<(usize, &CardRecord)> {
        let needle = keyword.trim().to_lowercase();
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| {
                card.code.to_lowercase().contains(&needle)
                    || card.class_name.to_lowercase().contains(&needle)
            })
            .map(|(i, card)| (i + 1, card))
            .collect()
    }

    /// Number of cards in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if no cards are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card, keeping the card type.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
