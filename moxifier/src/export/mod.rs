//! Moxfield exports.
//!
//! - [`deck`] - plain-text decklist for Moxfield's deck importer
//! - [`collection`] - collection CSV for Moxfield's collection importer
//!
//! Both exporters consume the same [`NormalizedCard`](crate::models::NormalizedCard)
//! slice and keep its order.

pub mod collection;
pub mod deck;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use collection::{emit_collection, write_collection, COLLECTION_HEADERS};
pub use deck::{deck_line, emit_deck, write_deck};

/// File name prefix of decklist exports
pub const DECK_FILE_PREFIX: &str = "moxifiedDeck-";

/// File name prefix of collection exports
pub const COLLECTION_FILE_PREFIX: &str = "moxifiedCollection-";

/// Decklist file name for an input export: `moxifiedDeck-<stem>.txt`
pub fn deck_file_name(input: &Path) -> PathBuf {
    let mut name = OsString::from(DECK_FILE_PREFIX);
    name.push(input.file_stem().unwrap_or_default());
    name.push(".txt");
    PathBuf::from(name)
}

/// Collection file name for an input export: `moxifiedCollection-<file name>`
pub fn collection_file_name(input: &Path) -> PathBuf {
    let mut name = OsString::from(COLLECTION_FILE_PREFIX);
    name.push(input.file_name().unwrap_or_default());
    PathBuf::from(name)
}
