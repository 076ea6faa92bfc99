//! Moxfield decklist export.
//!
//! One line per card: `<quantity> <name> (<set code>) <collector number>`,
//! with a trailing ` *F*` for foils. Etched cards carry no marker.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use mtg_common::Printing;

use crate::error::{MoxifyError, Result};
use crate::models::NormalizedCard;

const FOIL_MARKER: &str = " *F*";

/// Formats a single decklist line, without the line break.
pub fn deck_line(card: &NormalizedCard) -> String {
    let marker = match card.printing() {
        Some(Printing::Foil) => FOIL_MARKER,
        Some(Printing::Etched) | None => "",
    };

    format!(
        "{} {} ({}) {}{}",
        card.quantity(),
        card.name(),
        card.set_code(),
        card.collector_number(),
        marker
    )
}

/// Writes the decklist to any writer.
pub fn write_deck<W: Write>(cards: &[NormalizedCard], mut out: W) -> io::Result<()> {
    for card in cards {
        writeln!(out, "{}", deck_line(card))?;
    }
    out.flush()
}

/// Creates (or truncates) `path` and writes the decklist into it.
///
/// A failure part-way through may leave a partial file behind.
pub fn emit_deck<P: AsRef<Path>>(cards: &[NormalizedCard], path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing decklist to {}", path.display());

    let write_error = |source| MoxifyError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    write_deck(cards, BufWriter::new(file)).map_err(write_error)?;

    info!("Wrote {} deck lines to {}", cards.len(), path.display());
    Ok(())
}
