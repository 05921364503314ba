//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use stcard_parser::vocabulary::{CARD_MARKER, is_boundary};

/// Highlighter for card text and REPL commands.
pub struct CardHighlighter;

impl CardHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    ///
    /// Field keywords are cyan, numbers yellow, the `.st` marker bold and a
    /// leading `:command` green. Whitespace is preserved.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut first = true;
        for segment in segments(line) {
            if segment.chars().all(char::is_whitespace) {
                result.push_str(segment);
                continue;
            }
            let color = if first && segment.starts_with(':') {
                Some("\x1b[32m") // green
            } else if segment.starts_with(CARD_MARKER) {
                Some("\x1b[1m") // bold
            } else if is_boundary(segment) {
                Some("\x1b[36m") // cyan
            } else if segment.parse::<i64>().is_ok() {
                Some("\x1b[33m") // yellow
            } else {
                None
            };
            first = false;

            match color {
                Some(code) => {
                    result.push_str(code);
                    result.push_str(segment);
                    result.push_str("\x1b[0m");
                }
                None => result.push_str(segment),
            }
        }

        Cow::Owned(result)
    }
}

/// Splits a line into alternating runs of whitespace and non-whitespace.
fn segments(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let ws = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != ws)
            .map_or(rest.len(), |(i, _)| i);
        let (segment, tail) = rest.split_at(end);
        rest = tail;
        Some(segment)
    })
}

impl Default for CardHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
