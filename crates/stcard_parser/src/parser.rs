//! Main parser pipeline.
//!
//! Validates the card header, tokenizes once and dispatches to the
//! assembler for the requested card type.

use stcard_foundation::{CardRecord, CardType, Error, Result};
use tracing::debug;

use crate::assemble::{assemble_master, assemble_servant};
use crate::locator::FieldLocator;
use crate::tokenizer::{CardTokenizer, is_separator};
use crate::vocabulary::CARD_MARKER;

/// Parses card text into a [`CardRecord`].
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyInput`](stcard_foundation::ErrorKind::EmptyInput)
/// if `text` is empty or whitespace-only, and
/// [`ErrorKind::InvalidPrefix`](stcard_foundation::ErrorKind::InvalidPrefix)
/// if the trimmed text does not start with `.st`. Every other irregularity
/// (missing keywords, non-numeric stats) falls back to defaults.
pub fn parse(text: &str, card_type: CardType) -> Result<CardRecord> {
    let trimmed = validate(text)?;
    let tokens = CardTokenizer::tokenize(trimmed);
    debug!(%card_type, tokens = tokens.len(), "parsing card");

    let locator = FieldLocator::new(&tokens);
    let record = match card_type {
        CardType::Servant => assemble_servant(&locator, trimmed),
        CardType::Master => assemble_master(&locator, trimmed),
    };

    debug!(
        code = %record.code,
        entries = record.entry_count(),
        "parsed card"
    );
    Ok(record)
}

/// Parses card text with a string card-type tag such as `"SERVANT"` or
/// `"CONTROLLER"`.
///
/// # Errors
///
/// Returns [`ErrorKind::UnknownCardType`](stcard_foundation::ErrorKind::UnknownCardType)
/// for a tag outside the closed set, otherwise the errors of [`parse`].
pub fn parse_tagged(text: &str, tag: &str) -> Result<CardRecord> {
    parse(text, tag.parse()?)
}

/// Checks the structural requirements and returns the trimmed text.
fn validate(text: &str) -> Result<&str> {
    let trimmed = text.trim_matches(is_separator);
    if trimmed.is_empty() {
        debug!("rejected empty card text");
        return Err(Error::empty_input());
    }
    if !trimmed.starts_with(CARD_MARKER) {
        debug!("rejected card text without marker");
        return Err(Error::invalid_prefix(trimmed));
    }
    Ok(trimmed)
}
