//! Printing treatments that change how a card is listed.

use serde::{Deserialize, Serialize};

/// Special print treatment of a card. Regular printings have no treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Printing {
    Foil,
    Etched,
}

impl Printing {
    /// Returns the lowercase flag written to Moxfield ("foil" or "etched")
    pub fn as_str(&self) -> &'static str {
        match self {
            Printing::Foil => "foil",
            Printing::Etched => "etched",
        }
    }

    /// Classifies a Dragon Shield `Printing` value, ignoring case.
    ///
    /// Only the exact tokens "foil" and "etched" are recognized; everything
    /// else ("Normal", "NonFoil", "Foil Etched", "") is a regular printing.
    pub fn classify(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "foil" => Some(Printing::Foil),
            "etched" => Some(Printing::Etched),
            _ => None,
        }
    }
}
