//! Utterance normalization.

use std::fmt;
use std::ops::Deref;

/// Canonical form of an utterance: lowercased and trimmed.
///
/// Only [`normalize`] constructs this type, so every intent rule can rely on
/// its input already being canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercases (locale-independent Unicode mapping) and trims surrounding
/// whitespace. Total and idempotent.
pub fn normalize(raw: &str) -> NormalizedText {
    NormalizedText(raw.to_lowercase().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize("  What TIME is it?\n").as_str(), "what time is it?");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize("").as_str(), "");
        assert_eq!(normalize(" \t ").as_str(), "");
    }

    #[test]
    fn test_is_idempotent() {
        let inputs = ["  Open YouTube ", "ÄRGER im Büro", "search FOR Rust", "", "İstanbul"];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once);
            assert_eq!(once, twice, "normalize not idempotent for {input:?}");
        }
    }
}
