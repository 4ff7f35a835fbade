//! Action result models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An external action the engine requests but does not perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum Effect {
    OpenUrl(String),
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::OpenUrl(url) => write!(f, "open {url}"),
        }
    }
}

/// Outcome of one turn: what to say, and optionally what to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub response_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
}

impl ActionResult {
    pub const APOLOGY: &'static str = "Sorry, I encountered an error processing your command.";

    /// A spoken response with no effect.
    pub fn say(response_text: impl Into<String>) -> Self {
        Self {
            response_text: response_text.into(),
            effect: None,
        }
    }

    /// A spoken response that also requests opening `url`.
    pub fn open(response_text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            response_text: response_text.into(),
            effect: Some(Effect::OpenUrl(url.into())),
        }
    }

    /// The fixed response for a turn that failed internally.
    pub fn apology() -> Self {
        Self::say(Self::APOLOGY)
    }

    pub fn url(&self) -> Option<&str> {
        match &self.effect {
            Some(Effect::OpenUrl(url)) => Some(url),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_effect_as_tagged_variant() {
        let result = ActionResult::open("Opening github", "https://www.github.com");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["response_text"], "Opening github");
        assert_eq!(json["effect"]["type"], "open_url");
        assert_eq!(json["effect"]["target"], "https://www.github.com");
    }

    #[test]
    fn test_say_has_no_effect() {
        let result = ActionResult::say("Hello!");
        assert!(result.url().is_none());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("effect").is_none());
    }
}
