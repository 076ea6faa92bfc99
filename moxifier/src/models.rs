use mtg_common::{Condition, Printing};
use serde::Serialize;

/// A card row from a Dragon Shield export, normalized for Moxfield.
///
/// Text fields are kept exactly as exported. Condition and printing are
/// mapped onto the Moxfield vocabulary; values outside it are `None` and
/// emit as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCard {
    pub(crate) quantity: String,
    pub(crate) trade_quantity: String,
    pub(crate) name: String,
    pub(crate) set_code: String,
    pub(crate) set_name: String,
    pub(crate) collector_number: String,
    pub(crate) condition: Option<Condition>,
    pub(crate) printing: Option<Printing>,
    pub(crate) language: String,
}

impl NormalizedCard {
    /// Builds a card with a regular printing and no condition.
    ///
    /// Mostly useful for callers that assemble records by hand; the reader
    /// constructs cards straight from the export columns.
    pub fn new(
        quantity: impl Into<String>,
        name: impl Into<String>,
        set_code: impl Into<String>,
        collector_number: impl Into<String>,
    ) -> Self {
        Self {
            quantity: quantity.into(),
            trade_quantity: String::new(),
            name: name.into(),
            set_code: set_code.into(),
            set_name: String::new(),
            collector_number: collector_number.into(),
            condition: None,
            printing: None,
            language: String::new(),
        }
    }

    pub fn with_condition(mut self, condition: Option<Condition>) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_printing(mut self, printing: Option<Printing>) -> Self {
        self.printing = printing;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn trade_quantity(&self) -> &str {
        &self.trade_quantity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_code(&self) -> &str {
        &self.set_code
    }

    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    pub fn collector_number(&self) -> &str {
        &self.collector_number
    }

    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }

    pub fn printing(&self) -> Option<Printing> {
        self.printing
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the Moxfield condition code, or "" when the grade is unknown
    pub fn condition_code(&self) -> &'static str {
        self.condition.map(|c| c.code()).unwrap_or("")
    }

    /// Returns "foil", "etched" or "" for regular printings
    pub fn foil_flag(&self) -> &'static str {
        self.printing.map(|p| p.as_str()).unwrap_or("")
    }
}

/// One row of a Moxfield collection CSV
#[derive(Debug, Serialize)]
pub struct CollectionRow<'a> {
    #[serde(rename = "Count")]
    pub count: &'a str,

    #[serde(rename = "Name")]
    pub name: &'a str,

    #[serde(rename = "Edition")]
    pub edition: &'a str,

    #[serde(rename = "Condition")]
    pub condition: Option<Condition>,

    #[serde(rename = "Language")]
    pub language: &'a str,

    #[serde(rename = "Foil")]
    pub foil: Option<Printing>,

    #[serde(rename = "Collector Number")]
    pub collector_number: &'a str,
}

impl<'a> From<&'a NormalizedCard> for CollectionRow<'a> {
    fn from(card: &'a NormalizedCard) -> Self {
        Self {
            count: &card.quantity,
            name: &card.name,
            edition: &card.set_code,
            condition: card.condition,
            language: &card.language,
            foil: card.printing,
            collector_number: &card.collector_number,
        }
    }
}
