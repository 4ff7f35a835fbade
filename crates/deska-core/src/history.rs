//! Interaction history: an append-only log of turns.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One processed turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub utterance: String,
    pub response_text: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl HistoryEntry {
    pub fn new(
        utterance: impl Into<String>,
        response_text: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            utterance: utterance.into(),
            response_text: response_text.into(),
            timestamp,
        }
    }
}

/// The full log of a session.
///
/// Entries are never mutated or removed; [`recent`](Self::recent) is a
/// read-time window, not an eviction policy.
#[derive(Debug, Clone, Default)]
pub struct InteractionHistory {
    entries: Vec<HistoryEntry>,
}

impl InteractionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Up to the last `k` entries, most recent first.
    pub fn recent(&self, k: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(k).collect()
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
