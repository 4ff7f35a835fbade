//! The ordered intent rule list and its matcher.

use tracing::debug;

use super::model::{IntentId, MatchedIntent, Slots};
use crate::normalize::NormalizedText;
use crate::registry::AppRegistry;

type SlotExtractor = fn(&NormalizedText, &AppRegistry) -> Slots;

/// One classification rule.
///
/// A rule matches when any of its keywords is a substring of the normalized
/// text. Matching is deliberately not word-boundary aware; the only carve-out
/// is `excluded`, phrases whose occurrences never count as a keyword hit.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub id: IntentId,
    pub keywords: &'static [&'static str],
    pub excluded: &'static [&'static str],
    extract: SlotExtractor,
}

impl IntentRule {
    pub const fn new(
        id: IntentId,
        keywords: &'static [&'static str],
        extract: SlotExtractor,
    ) -> Self {
        Self {
            id,
            keywords,
            excluded: &[],
            extract,
        }
    }

    pub const fn excluding(mut self, excluded: &'static [&'static str]) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn matches(&self, text: &NormalizedText) -> bool {
        if self.excluded.is_empty() {
            return self.keywords.iter().any(|keyword| text.contains(keyword));
        }
        let mut visible = text.to_string();
        for phrase in self.excluded {
            visible = visible.replace(phrase, " ");
        }
        self.keywords.iter().any(|keyword| visible.contains(keyword))
    }

    pub fn extract_slots(&self, text: &NormalizedText, registry: &AppRegistry) -> Slots {
        (self.extract)(text, registry)
    }
}

/// Rules in priority order. Earlier rules shadow later ones.
///
/// "times" is the multiplication word operator, so it does not trigger Time.
const STANDARD_RULES: [IntentRule; 8] = [
    IntentRule::new(IntentId::Time, &["time"], no_slots).excluding(&["times"]),
    IntentRule::new(IntentId::Date, &["date"], no_slots),
    IntentRule::new(IntentId::Search, &["search for", "search"], search_slots),
    IntentRule::new(IntentId::OpenResource, &["open"], open_slots),
    IntentRule::new(IntentId::Calculate, &["calculate", "what is"], calculate_slots),
    IntentRule::new(IntentId::Weather, &["weather"], no_slots),
    IntentRule::new(IntentId::Help, &["help", "what can you do"], no_slots),
    IntentRule::new(IntentId::Greeting, &["hello", "hi"], no_slots),
];

/// Word operators and their symbols, substituted in this order.
const WORD_OPERATORS: [(&str, &str); 5] = [
    ("plus", "+"),
    ("minus", "-"),
    ("times", "*"),
    ("multiplied by", "*"),
    ("divided by", "/"),
];

/// An immutable, ordered set of intent rules.
#[derive(Debug, Clone)]
pub struct IntentCatalog {
    rules: Vec<IntentRule>,
}

impl IntentCatalog {
    /// A catalog with caller-supplied rules, checked in the given order.
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// The standard catalog: Time, Date, Search, OpenResource, Calculate,
    /// Weather, Help, Greeting, with Unmatched as the implicit fallback.
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Returns the first matching intent and its slots, or
    /// [`IntentId::Unmatched`] with no slots.
    pub fn match_text(&self, text: &NormalizedText, registry: &AppRegistry) -> MatchedIntent {
        match self.rules.iter().find(|rule| rule.matches(text)) {
            Some(rule) => {
                let slots = rule.extract_slots(text, registry);
                debug!("[Intent] '{}' matched {} with {:?}", text, rule.id, slots);
                MatchedIntent::new(rule.id, slots)
            }
            None => {
                debug!("[Intent] '{}' matched no rule", text);
                MatchedIntent::unmatched()
            }
        }
    }
}

impl Default for IntentCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Slot extractors
// ============================================================================

fn remove_first(text: &str, pattern: &str) -> String {
    text.replacen(pattern, "", 1)
}

fn no_slots(_text: &NormalizedText, _registry: &AppRegistry) -> Slots {
    Slots::new()
}

fn search_slots(text: &NormalizedText, _registry: &AppRegistry) -> Slots {
    let query = remove_first(&remove_first(text, "search for"), "search");
    Slots::new().with(Slots::QUERY, query.trim())
}

fn open_slots(text: &NormalizedText, registry: &AppRegistry) -> Slots {
    let remainder = remove_first(text, "open");
    let remainder = remainder.trim();
    let app_key = registry
        .find_in(remainder)
        .map(|entry| entry.key.as_str())
        .unwrap_or(remainder);
    Slots::new().with(Slots::APP_KEY, app_key)
}

fn calculate_slots(text: &NormalizedText, _registry: &AppRegistry) -> Slots {
    let mut expression = remove_first(&remove_first(text, "calculate"), "what is");
    for (word, symbol) in WORD_OPERATORS {
        expression = expression.replace(word, symbol);
    }
    Slots::new().with(Slots::EXPRESSION, expression.trim())
}
