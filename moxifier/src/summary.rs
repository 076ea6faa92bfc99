//! Card counting and deck-size assessment.

use log::{debug, info};

use crate::error::{MoxifyError, Result};
use crate::models::NormalizedCard;

/// Deck size of the Commander format
pub const COMMANDER_DECK_SIZE: u64 = 100;

/// How a card total compares to the expected deck size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckAssessment {
    /// Exactly the expected size
    Complete,
    /// One card over, which is what a deck plus a companion looks like
    PossiblyIncludesCompanion,
    /// Fewer cards than the expected size
    Incomplete,
    /// More than one card over (sideboard included, or a miscount)
    OversizedOrError,
}

impl DeckAssessment {
    /// Classifies `total` against a target deck size
    pub fn for_total(total: u64, deck_size: u64) -> Self {
        if total == deck_size {
            DeckAssessment::Complete
        } else if total < deck_size {
            DeckAssessment::Incomplete
        } else if deck_size.checked_add(1) == Some(total) {
            DeckAssessment::PossiblyIncludesCompanion
        } else {
            DeckAssessment::OversizedOrError
        }
    }

    /// Stable identifier (e.g., "complete")
    pub fn as_str(&self) -> &'static str {
        match self {
            DeckAssessment::Complete => "complete",
            DeckAssessment::PossiblyIncludesCompanion => "possibly-includes-companion",
            DeckAssessment::Incomplete => "incomplete",
            DeckAssessment::OversizedOrError => "oversized-or-error",
        }
    }

    /// Human-readable remark for console output
    pub fn message(&self) -> &'static str {
        match self {
            DeckAssessment::Complete => "Just the right amount of cards.",
            DeckAssessment::PossiblyIncludesCompanion => {
                "Is that a mistake or do you have a Companion card in there?"
            }
            DeckAssessment::Incomplete => "Not quite a complete deck yet.",
            DeckAssessment::OversizedOrError => {
                "More than a full deck in there. Is that a sideboard or a miscount?"
            }
        }
    }
}

/// Card count of a parsed export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckSummary {
    /// Sum of all quantities
    pub total_cards: u64,
    /// Number of records
    pub rows: usize,
    pub deck_size: u64,
    pub assessment: DeckAssessment,
}

impl DeckSummary {
    /// Console line like "100 total cards found in 87 rows."
    pub fn headline(&self) -> String {
        format!(
            "{} total cards found in {} rows.",
            self.total_cards, self.rows
        )
    }
}

/// Counts cards against the Commander deck size.
pub fn summarize(cards: &[NormalizedCard]) -> Result<DeckSummary> {
    summarize_for(cards, COMMANDER_DECK_SIZE)
}

/// Counts cards against an arbitrary deck size (e.g. 60 for constructed).
///
/// # Errors
/// [`MoxifyError::InvalidQuantity`] if any quantity is not a non-negative integer.
pub fn summarize_for(cards: &[NormalizedCard], deck_size: u64) -> Result<DeckSummary> {
    let mut total_cards: u64 = 0;

    for card in cards {
        let quantity = parse_quantity(card)?;
        total_cards = total_cards
            .checked_add(quantity)
            .ok_or_else(|| MoxifyError::CountOverflow {
                card: card.name().to_string(),
            })?;
    }

    let assessment = DeckAssessment::for_total(total_cards, deck_size);
    info!(
        "Counted {} cards in {} rows ({})",
        total_cards,
        cards.len(),
        assessment.as_str()
    );

    Ok(DeckSummary {
        total_cards,
        rows: cards.len(),
        deck_size,
        assessment,
    })
}

fn parse_quantity(card: &NormalizedCard) -> Result<u64> {
    let value = card.quantity();
    debug!("Parsing quantity {value:?} for {}", card.name());

    value
        .trim()
        .parse::<u64>()
        .map_err(|source| MoxifyError::InvalidQuantity {
            card: card.name().to_string(),
            value: value.to_string(),
            source,
        })
}
