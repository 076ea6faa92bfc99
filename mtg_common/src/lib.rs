//! Shared types for MTG business operations.
//!
//! Holds the card vocabulary that more than one tool needs: condition grades
//! and printing treatments, together with the mappings from the Dragon Shield
//! card manager export format.

pub mod condition;
pub mod printing;

pub use condition::{normalize_condition, Condition};
pub use printing::Printing;
