//! Moxifier - Dragon Shield to Moxfield converter
//!
//! Reads card exports from the Dragon Shield card manager and writes them in
//! the two formats Moxfield imports: a plain-text decklist and a collection
//! CSV.

pub mod convert;
pub mod error;
pub mod export;
pub mod models;
pub mod reader;
pub mod summary;

pub use convert::{convert, ConversionReport, ConvertOptions, OutputMode};
pub use error::{ErrorKind, MoxifyError, Result};
pub use export::{emit_collection, emit_deck, write_collection, write_deck};
pub use models::NormalizedCard;
pub use reader::{parse, parse_str, parse_with, ParseOptions};
pub use summary::{summarize, summarize_for, DeckAssessment, DeckSummary};
