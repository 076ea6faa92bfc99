//! Card condition grades as used by Moxfield, and the Dragon Shield mapping.

use serde::{Deserialize, Serialize};

/// Moxfield condition grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "M")]
    Mint,
    #[serde(rename = "NM")]
    NearMint,
    #[serde(rename = "LP")]
    LightlyPlayed,
    #[serde(rename = "MP")]
    ModeratelyPlayed,
    #[serde(rename = "HP")]
    HeavilyPlayed,
    #[serde(rename = "D")]
    Damaged,
}

impl Condition {
    /// Returns the Moxfield condition code (e.g., "NM", "LP")
    pub fn code(&self) -> &'static str {
        match self {
            Condition::Mint => "M",
            Condition::NearMint => "NM",
            Condition::LightlyPlayed => "LP",
            Condition::ModeratelyPlayed => "MP",
            Condition::HeavilyPlayed => "HP",
            Condition::Damaged => "D",
        }
    }

    /// Maps a Dragon Shield condition name onto a Moxfield grade.
    ///
    /// Dragon Shield grades one step more generously than Moxfield, so
    /// "Excellent" lands on NM and "Good" on LP. Matching is exact; any value
    /// outside the Dragon Shield vocabulary (including the empty string)
    /// yields `None`.
    pub fn from_dragon_shield(name: &str) -> Option<Self> {
        match name {
            "Mint" => Some(Condition::Mint),
            "NearMint" => Some(Condition::NearMint),
            "Excellent" => Some(Condition::NearMint),
            "Good" => Some(Condition::LightlyPlayed),
            "LightPlayed" => Some(Condition::ModeratelyPlayed),
            "Played" => Some(Condition::HeavilyPlayed),
            "Poor" => Some(Condition::Damaged),
            _ => None,
        }
    }

    /// Returns all grades from best to worst
    pub fn all() -> &'static [Condition] {
        &[
            Condition::Mint,
            Condition::NearMint,
            Condition::LightlyPlayed,
            Condition::ModeratelyPlayed,
            Condition::HeavilyPlayed,
            Condition::Damaged,
        ]
    }
}

/// Normalizes a Dragon Shield condition name to its Moxfield code.
///
/// Never fails: unknown or missing values become the empty string.
pub fn normalize_condition(name: &str) -> &'static str {
    match Condition::from_dragon_shield(name) {
        Some(condition) => condition.code(),
        None => {
            if !name.is_empty() {
                log::debug!("Unrecognized condition '{name}', leaving it blank");
            }
            ""
        }
    }
}
