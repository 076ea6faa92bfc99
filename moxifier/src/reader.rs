//! Dragon Shield CSV export reading.
//!
//! Dragon Shield prefixes its exports with a delimiter declaration line
//! (`sep=,` or `"sep=;"` depending on locale) before the usual header row.
//! The reader honours that declaration, maps conditions and printings onto
//! the Moxfield vocabulary and copies every other field verbatim.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use csv::StringRecord;
use log::{debug, info, warn};
use mtg_common::{Condition, Printing};

use crate::error::{MoxifyError, Result};
use crate::models::NormalizedCard;

/// Columns every Dragon Shield export must provide
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Quantity",
    "Trade Quantity",
    "Card Name",
    "Set Code",
    "Set Name",
    "Card Number",
    "Condition",
    "Printing",
    "Language",
];

/// Reader behaviour switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop rows with an empty `Quantity` (Dragon Shield appends one at the end)
    pub skip_empty_quantity: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            skip_empty_quantity: true,
        }
    }
}

/// Reads a Dragon Shield export with default options.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<Vec<NormalizedCard>> {
    parse_with(path, &ParseOptions::default())
}

/// Reads a Dragon Shield export.
///
/// # Errors
/// * [`MoxifyError::FileNotFound`] / [`MoxifyError::Read`] if the file can't be read
/// * a format error if the delimiter line, header or a row is malformed
///
/// Nothing is returned on failure; a file either parses completely or not at all.
pub fn parse_with<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<Vec<NormalizedCard>> {
    let path = path.as_ref();
    info!("Reading cards from {}", path.display());

    let content = fs::read(path).map_err(|source| {
        if source.kind() == IoErrorKind::NotFound {
            MoxifyError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MoxifyError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!("Export size: {} bytes", content.len());
    parse_content(&content, path, options)
}

/// Parses export content that is already in memory.
pub fn parse_str(content: &str, options: &ParseOptions) -> Result<Vec<NormalizedCard>> {
    parse_content(content.as_bytes(), Path::new("<memory>"), options)
}

/// Extracts the delimiter from a declaration line such as `sep=;`.
///
/// The delimiter is whatever follows the first `=`, with surrounding quotes
/// and line endings removed. Returns `None` if there is no `=` or the
/// declared value is not a single byte.
pub fn parse_delimiter_line(line: &str) -> Option<u8> {
    let declared = line.split('=').nth(1)?;
    let declared = declared.trim_matches(|c| c == '"' || c == '\r' || c == '\n');

    match declared.as_bytes() {
        [delimiter] => Some(*delimiter),
        _ => None,
    }
}

/// Returns true for the filler rows some exporters append (no quantity).
pub fn is_exporter_filler_row(quantity: &str) -> bool {
    quantity.is_empty()
}

fn parse_content(
    content: &[u8],
    path: &Path,
    options: &ParseOptions,
) -> Result<Vec<NormalizedCard>> {
    if content.is_empty() {
        warn!("{} is empty", path.display());
        return Err(MoxifyError::MissingDelimiter {
            path: path.to_path_buf(),
        });
    }

    let (first_line, body) = match content.iter().position(|&b| b == b'\n') {
        Some(end) => (&content[..end], &content[end + 1..]),
        None => (content, &content[content.len()..]),
    };

    let first_line = String::from_utf8_lossy(first_line);
    let delimiter =
        parse_delimiter_line(&first_line).ok_or_else(|| MoxifyError::InvalidDelimiter {
            path: path.to_path_buf(),
            line: first_line.trim_end().to_string(),
        })?;
    debug!("Declared delimiter: {:?}", delimiter as char);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(body);

    let csv_error = |source: csv::Error| MoxifyError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnIndex::from_headers(&headers, path)?;

    let mut cards = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        // Body positions start after the delimiter declaration
        let row = record.position().map(|p| p.line() + 1).unwrap_or_default();

        if options.skip_empty_quantity
            && is_exporter_filler_row(record.get(columns.quantity).unwrap_or(""))
        {
            debug!("Skipping row {row} without quantity");
            skipped += 1;
            continue;
        }

        let card = columns.to_card(&record, row, path)?;
        debug!("Read {} x {} ({})", card.quantity, card.name, card.set_code);
        cards.push(card);
    }

    info!(
        "Read {} cards from {} ({} rows skipped)",
        cards.len(),
        path.display(),
        skipped
    );
    Ok(cards)
}

/// Positions of the required columns within the header row
#[derive(Debug)]
struct ColumnIndex {
    quantity: usize,
    trade_quantity: usize,
    card_name: usize,
    set_code: usize,
    set_name: usize,
    card_number: usize,
    condition: usize,
    printing: usize,
    language: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| MoxifyError::MissingColumn {
                    column,
                    path: path.to_path_buf(),
                })
        };

        Ok(Self {
            quantity: find(REQUIRED_COLUMNS[0])?,
            trade_quantity: find(REQUIRED_COLUMNS[1])?,
            card_name: find(REQUIRED_COLUMNS[2])?,
            set_code: find(REQUIRED_COLUMNS[3])?,
            set_name: find(REQUIRED_COLUMNS[4])?,
            card_number: find(REQUIRED_COLUMNS[5])?,
            condition: find(REQUIRED_COLUMNS[6])?,
            printing: find(REQUIRED_COLUMNS[7])?,
            language: find(REQUIRED_COLUMNS[8])?,
        })
    }

    fn to_card(&self, record: &StringRecord, row: u64, path: &Path) -> Result<NormalizedCard> {
        let field = |index: usize, column: &'static str| {
            record
                .get(index)
                .ok_or_else(|| MoxifyError::IncompleteRow {
                    row,
                    column,
                    path: path.to_path_buf(),
                })
        };

        let quantity = field(self.quantity, "Quantity")?;
        let trade_quantity = field(self.trade_quantity, "Trade Quantity")?;
        let name = field(self.card_name, "Card Name")?;
        let set_code = field(self.set_code, "Set Code")?;
        let set_name = field(self.set_name, "Set Name")?;
        let collector_number = field(self.card_number, "Card Number")?;
        let condition = field(self.condition, "Condition")?;
        let printing = field(self.printing, "Printing")?;
        let language = field(self.language, "Language")?;

        let card = NormalizedCard {
            quantity: quantity.to_string(),
            trade_quantity: trade_quantity.to_string(),
            name: name.to_string(),
            set_code: set_code.to_string(),
            set_name: set_name.to_string(),
            collector_number: collector_number.to_string(),
            condition: Condition::from_dragon_shield(condition),
            printing: Printing::classify(printing),
            language: language.to_string(),
        };

        if card.condition.is_none() && !condition.is_empty() {
            debug!("Row {row}: unknown condition {condition:?}, leaving it blank");
        }

        Ok(card)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
