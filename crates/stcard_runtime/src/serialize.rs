//! Card serialization to and from JSON.
//!
//! This is the shape storage and display collaborators consume: camelCase
//! fields, `"SERVANT"`/`"MASTER"` card types, and base stats written out in
//! full even when a master card aliases them to its total stats.

use stcard_foundation::{CardRecord, Error, Result};

/// Serializes a card to compact JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(record: &CardRecord) -> Result<String> {
    serde_json::to_string(record).map_err(|e| Error::serialization(e.to_string()))
}

/// Serializes a card to indented JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty(record: &CardRecord) -> Result<String> {
    serde_json::to_string_pretty(record).map_err(|e| Error::serialization(e.to_string()))
}

/// Serializes several cards as an indented JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_array(records: &[CardRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a card from JSON.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or misses a required field.
pub fn from_json(json: &str) -> Result<CardRecord> {
    serde_json::from_str(json).map_err(|e| Error::serialization(e.to_string()))
}
