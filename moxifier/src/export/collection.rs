//! Moxfield collection CSV export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator};
use log::{debug, info};

use crate::error::{MoxifyError, Result};
use crate::models::{CollectionRow, NormalizedCard};

/// Header row expected by Moxfield's collection importer
pub const COLLECTION_HEADERS: [&str; 7] = [
    "Count",
    "Name",
    "Edition",
    "Condition",
    "Language",
    "Foil",
    "Collector Number",
];

/// Writes the collection CSV to any writer.
///
/// Fields are quoted only when they contain a delimiter, quote or line
/// break; every record, header included, ends in `\n`.
pub fn write_collection<W: Write>(cards: &[NormalizedCard], out: W) -> io::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    // Written by hand so an empty collection still gets its header
    writer.write_record(COLLECTION_HEADERS)?;
    for card in cards {
        writer.serialize(CollectionRow::from(card))?;
    }
    writer.flush()
}

/// Creates (or truncates) `path` and writes the collection CSV into it.
pub fn emit_collection<P: AsRef<Path>>(cards: &[NormalizedCard], path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing collection to {}", path.display());

    let write_error = |source| MoxifyError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    write_collection(cards, BufWriter::new(file)).map_err(write_error)?;

    info!("Wrote {} collection rows to {}", cards.len(), path.display());
    Ok(())
}
