//! Intent domain models.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The classified goal of one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentId {
    Time,
    Date,
    Search,
    OpenResource,
    Calculate,
    Weather,
    Help,
    Greeting,
    /// Fallback when no rule matches
    Unmatched,
}

impl IntentId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentId::Time => "Time",
            IntentId::Date => "Date",
            IntentId::Search => "Search",
            IntentId::OpenResource => "OpenResource",
            IntentId::Calculate => "Calculate",
            IntentId::Weather => "Weather",
            IntentId::Help => "Help",
            IntentId::Greeting => "Greeting",
            IntentId::Unmatched => "Unmatched",
        }
    }
}

impl fmt::Display for IntentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named parameters extracted for a matched intent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slots(BTreeMap<String, String>);

impl Slots {
    pub const QUERY: &'static str = "query";
    pub const APP_KEY: &'static str = "app_key";
    pub const EXPRESSION: &'static str = "expression";

    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Result of running the catalog over one normalized utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedIntent {
    pub id: IntentId,
    pub slots: Slots,
}

impl MatchedIntent {
    pub fn new(id: IntentId, slots: Slots) -> Self {
        Self { id, slots }
    }

    pub fn unmatched() -> Self {
        Self::new(IntentId::Unmatched, Slots::new())
    }
}
