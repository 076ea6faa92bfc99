//! End-to-end conversion of one Dragon Shield export.
//!
//! Reads the export, counts it and writes the selected Moxfield outputs.
//! Each call is independent; nothing is kept between conversions.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::info;

use crate::error::Result;
use crate::export::{collection_file_name, deck_file_name, emit_collection, emit_deck};
use crate::reader::{parse_with, ParseOptions};
use crate::summary::{summarize_for, DeckSummary, COMMANDER_DECK_SIZE};

/// Which Moxfield files to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Decklist text file only
    #[value(alias = "d")]
    Deck,
    /// Collection CSV only
    #[value(alias = "c")]
    Collection,
    /// Decklist and collection CSV
    #[default]
    #[value(alias = "dc", alias = "cd")]
    Both,
}

impl OutputMode {
    pub fn writes_deck(&self) -> bool {
        matches!(self, OutputMode::Deck | OutputMode::Both)
    }

    pub fn writes_collection(&self) -> bool {
        matches!(self, OutputMode::Collection | OutputMode::Both)
    }
}

/// Settings for a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub mode: OutputMode,
    /// Directory the output files are written into
    pub output_dir: PathBuf,
    /// Target size for the count assessment
    pub deck_size: u64,
    pub parse: ParseOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            output_dir: PathBuf::from("."),
            deck_size: COMMANDER_DECK_SIZE,
            parse: ParseOptions::default(),
        }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub summary: DeckSummary,
    pub deck_path: Option<PathBuf>,
    pub collection_path: Option<PathBuf>,
}

impl ConversionReport {
    /// Paths of all files written, decklist first
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.deck_path
            .iter()
            .chain(self.collection_path.iter())
            .map(PathBuf::as_path)
    }
}

/// Converts one export into the Moxfield files selected by `options.mode`.
///
/// Parsing and counting happen before anything is written, so a malformed
/// export or a bad quantity leaves the output directory untouched.
pub fn convert<P: AsRef<Path>>(input: P, options: &ConvertOptions) -> Result<ConversionReport> {
    let input = input.as_ref();

    let cards = parse_with(input, &options.parse)?;
    let summary = summarize_for(&cards, options.deck_size)?;

    let deck_path = if options.mode.writes_deck() {
        let path = options.output_dir.join(deck_file_name(input));
        emit_deck(&cards, &path)?;
        Some(path)
    } else {
        None
    };

    let collection_path = if options.mode.writes_collection() {
        let path = options.output_dir.join(collection_file_name(input));
        emit_collection(&cards, &path)?;
        Some(path)
    } else {
        None
    };

    info!("Converted {} ({:?})", input.display(), options.mode);

    Ok(ConversionReport {
        input: input.to_path_buf(),
        summary,
        deck_path,
        collection_path,
    })
}
