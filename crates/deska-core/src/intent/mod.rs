//! Intent classification.
//!
//! An [`IntentCatalog`] is an ordered list of [`IntentRule`]s. Matching walks
//! the list and the first rule whose keyword occurs in the normalized text
//! wins, so the order of the list is the priority of the intents.

pub mod catalog;
pub mod model;

pub use catalog::{IntentCatalog, IntentRule};
pub use model::{IntentId, MatchedIntent, Slots};
