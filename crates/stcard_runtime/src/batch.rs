//! Loading several cards from one text file.
//!
//! A card starts at a line whose trimmed text begins with `.st`; following
//! lines belong to it until the next such line. Blank lines before the first
//! card are ignored.

use std::fs;
use std::path::Path;

use stcard_foundation::{CardRecord, CardType, Error, ErrorContext, Result};
use stcard_parser::{is_separator, parse};
use stcard_parser::vocabulary::CARD_MARKER;
use tracing::{debug, info};

/// One card's text and where it starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardBlock {
    /// Line number of the `.st` line (1-indexed).
    pub line: usize,
    /// The card's lines, joined with newlines.
    pub text: String,
}

/// Splits text into card blocks.
///
/// # Errors
///
/// Returns an `InvalidPrefix` error (with the line number as context) if
/// non-blank text appears before the first card.
pub fn split_cards(text: &str) -> Result<Vec<CardBlock>> {
    let mut blocks: Vec<CardBlock> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.trim_start_matches(is_separator).starts_with(CARD_MARKER) {
            blocks.push(CardBlock {
                line: line_no,
                text: line.to_string(),
            });
        } else if let Some(block) = blocks.last_mut() {
            block.text.push('\n');
            block.text.push_str(line);
        } else if !line.trim_matches(is_separator).is_empty() {
            return Err(Error::invalid_prefix(line.trim_matches(is_separator))
                .with_context(ErrorContext::new().with_line(line_no)));
        }
    }

    Ok(blocks)
}

/// Parses every card in `text`.
///
/// `source` names the input in error context.
///
/// # Errors
///
/// Returns `EmptyInput` if the text holds no card, or the first parse error
/// annotated with `source` and the card's starting line.
pub fn parse_cards(text: &str, card_type: CardType, source: &str) -> Result<Vec<CardRecord>> {
    let blocks = split_cards(text).map_err(|e| annotate(e, source, None))?;
    if blocks.is_empty() {
        return Err(annotate(Error::empty_input(), source, None));
    }

    debug!(source, cards = blocks.len(), "split card file");
    blocks
        .iter()
        .map(|block| parse(&block.text, card_type).map_err(|e| annotate(e, source, Some(block.line))))
        .collect()
}

/// Reads and parses a card file.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read, otherwise the errors of
/// [`parse_cards`].
pub fn load_cards<P: AsRef<Path>>(path: P, card_type: CardType) -> Result<Vec<CardRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        Error::io(format!("failed to read file '{}': {e}", path.display()))
    })?;

    let cards = parse_cards(&text, card_type, &path.display().to_string())?;
    info!(path = %path.display(), cards = cards.len(), "loaded card file");
    Ok(cards)
}

/// Fills in the source name, keeping a line number already present.
fn annotate(error: Error, source: &str, line: Option<usize>) -> Error {
    let mut context = error.context.clone().unwrap_or_default();
    context.source = Some(source.to_string());
    if context.line.is_none() {
        context.line = line;
    }
    error.with_context(context)
}
