//! Maps a matched intent to its response and effect.

use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;
use url::Url;

use super::model::ActionResult;
use crate::clock::{format_date, format_time};
use crate::config::AssistantConfig;
use crate::error::{DeskaError, Result};
use crate::intent::{IntentId, MatchedIntent, Slots};
use crate::math::{evaluate, format_number};
use crate::registry::AppRegistry;

pub const HELP_RESPONSE: &str = "I can tell you the time and date, search the web, open applications like YouTube or Google, perform calculations, and much more. Just ask me!";
pub const GREETING_RESPONSE: &str = "Hello! How can I assist you today?";
pub const EMPTY_SEARCH_RESPONSE: &str = "What would you like me to search for?";
pub const CALCULATION_FAILED_RESPONSE: &str = "I could not calculate that expression";
pub const WEATHER_RESPONSE: &str = "Opening weather information";

/// Characters escaped in a search query; matches JavaScript's `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Everything a dispatch needs that the dispatcher does not own.
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    /// The raw utterance, echoed back for unmatched input.
    pub utterance: &'a str,
    pub now: DateTime<FixedOffset>,
    pub registry: &'a AppRegistry,
}

/// Per-intent business logic. Pure: returns effects, never performs them.
#[derive(Debug, Clone)]
pub struct ActionDispatcher {
    search_url: Url,
    weather_url: Url,
}

impl ActionDispatcher {
    pub fn new(search_url: &str, weather_url: &str) -> Result<Self> {
        let search_url =
            Url::parse(search_url).map_err(|e| DeskaError::invalid_url(search_url, e.to_string()))?;
        let weather_url =
            Url::parse(weather_url).map_err(|e| DeskaError::invalid_url(weather_url, e.to_string()))?;
        Ok(Self {
            search_url,
            weather_url,
        })
    }

    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        Self::new(&config.search_url, &config.weather_url)
    }

    /// Runs the action for `intent`.
    ///
    /// Calculation failures are answered here. Any `Err` returned is an
    /// unexpected failure for the caller to convert into an apology.
    pub fn dispatch(&self, intent: &MatchedIntent, ctx: &DispatchContext<'_>) -> Result<ActionResult> {
        let result = match intent.id {
            IntentId::Time => {
                ActionResult::say(format!("The current time is {}", format_time(&ctx.now)))
            }
            IntentId::Date => ActionResult::say(format!("Today is {}", format_date(&ctx.now))),
            IntentId::Search => {
                let query = required_slot(intent, Slots::QUERY)?;
                if query.is_empty() {
                    ActionResult::say(EMPTY_SEARCH_RESPONSE)
                } else {
                    ActionResult::open(format!("Searching for {}", query), self.search_url_for(query))
                }
            }
            IntentId::OpenResource => {
                let app_key = required_slot(intent, Slots::APP_KEY)?;
                match ctx.registry.find_in(app_key) {
                    Some(entry) => {
                        ActionResult::open(format!("Opening {}", entry.key), entry.url.as_str())
                    }
                    None => {
                        warn!("[Dispatch] No registered app for '{}'", app_key);
                        ActionResult::say(format!("I'm not sure how to open {}", app_key))
                    }
                }
            }
            IntentId::Calculate => {
                let expression = required_slot(intent, Slots::EXPRESSION)?;
                let sanitized = sanitize_expression(expression);
                match evaluate(&sanitized) {
                    Ok(value) => ActionResult::say(format!("The result is {}", format_number(value))),
                    Err(e) => {
                        warn!("[Dispatch] Could not evaluate '{}': {}", sanitized, e);
                        ActionResult::say(CALCULATION_FAILED_RESPONSE)
                    }
                }
            }
            IntentId::Weather => ActionResult::open(WEATHER_RESPONSE, self.weather_url.as_str()),
            IntentId::Help => ActionResult::say(HELP_RESPONSE),
            IntentId::Greeting => ActionResult::say(GREETING_RESPONSE),
            IntentId::Unmatched => ActionResult::say(format!(
                "I heard you say: {}. I'm not sure how to help with that yet. Try asking me for the time, to search something, or to open an application.",
                ctx.utterance
            )),
        };
        Ok(result)
    }

    /// Search engine URL with `query` appended as the `q` parameter.
    ///
    /// The query is percent-encoded as a URI component, so spaces become
    /// `%20` and `'()!*~` are kept as they are.
    pub fn search_url_for(&self, query: &str) -> String {
        let mut base = self.search_url.clone();
        base.set_fragment(None);
        let separator = match base.query() {
            None => "?",
            Some("") => "",
            Some(_) => "&",
        };
        format!(
            "{}{}q={}",
            base,
            separator,
            utf8_percent_encode(query, QUERY_COMPONENT)
        )
    }
}

fn required_slot<'a>(intent: &'a MatchedIntent, slot: &str) -> Result<&'a str> {
    intent
        .slots
        .get(slot)
        .ok_or_else(|| DeskaError::missing_slot(intent.id.as_str(), slot))
}

/// Drops every character that is not a digit, an operator, a parenthesis or
/// a decimal point.
pub fn sanitize_expression(expression: &str) -> String {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    DISALLOWED
        .get_or_init(|| Regex::new(r"[^0-9+\-*/().]").expect("static pattern is valid"))
        .replace_all(expression, "")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> ActionDispatcher {
        ActionDispatcher::from_config(&AssistantConfig::default()).unwrap()
    }

    fn run(id: IntentId, slots: Slots) -> Result<ActionResult> {
        let registry = AppRegistry::default();
        let ctx = DispatchContext {
            utterance: "Whatever You Said",
            now: DateTime::parse_from_rfc3339("2026-10-19T14:07:00+02:00").unwrap(),
            registry: &registry,
        };
        dispatcher().dispatch(&MatchedIntent::new(id, slots), &ctx)
    }

    #[test]
    fn test_time_and_date() {
        assert_eq!(
            run(IntentId::Time, Slots::new()).unwrap(),
            ActionResult::say("The current time is 02:07 PM")
        );
        assert_eq!(
            run(IntentId::Date, Slots::new()).unwrap(),
            ActionResult::say("Today is Monday, October 19, 2026")
        );
    }

    #[test]
    fn test_search_builds_encoded_url() {
        let result = run(IntentId::Search, Slots::new().with(Slots::QUERY, "rust & c++")).unwrap();
        assert_eq!(result.response_text, "Searching for rust & c++");
        assert_eq!(
            result.url(),
            Some("https://www.google.com/search?q=rust%20%26%20c%2B%2B")
        );
    }

    #[test]
    fn test_search_query_keeps_uri_component_marks() {
        let result = run(
            IntentId::Search,
            Slots::new().with(Slots::QUERY, "what's new (2026)!"),
        )
        .unwrap();
        assert_eq!(
            result.url(),
            Some("https://www.google.com/search?q=what's%20new%20(2026)!")
        );
    }

    #[test]
    fn test_search_url_with_existing_query() {
        let dispatcher =
            ActionDispatcher::new("https://duckduckgo.com/?ia=web", "https://wttr.in").unwrap();
        assert_eq!(
            dispatcher.search_url_for("rust book"),
            "https://duckduckgo.com/?ia=web&q=rust%20book"
        );

        let dispatcher = ActionDispatcher::new("https://example.com/find?", "https://wttr.in").unwrap();
        assert_eq!(dispatcher.search_url_for("x"), "https://example.com/find?q=x");
    }

    #[test]
    fn test_empty_search_asks_for_query() {
        let result = run(IntentId::Search, Slots::new().with(Slots::QUERY, "")).unwrap();
        assert_eq!(result, ActionResult::say(EMPTY_SEARCH_RESPONSE));
    }

    #[test]
    fn test_open_known_and_unknown_apps() {
        let result = run(IntentId::OpenResource, Slots::new().with(Slots::APP_KEY, "github")).unwrap();
        assert_eq!(result, ActionResult::open("Opening github", "https://www.github.com"));

        let result =
            run(IntentId::OpenResource, Slots::new().with(Slots::APP_KEY, "the calculator")).unwrap();
        assert_eq!(result, ActionResult::say("I'm not sure how to open the calculator"));
    }

    #[test]
    fn test_calculate() {
        let result = run(IntentId::Calculate, Slots::new().with(Slots::EXPRESSION, "25 * 4")).unwrap();
        assert_eq!(result, ActionResult::say("The result is 100"));

        let result = run(IntentId::Calculate, Slots::new().with(Slots::EXPRESSION, "5 / 0")).unwrap();
        assert_eq!(result, ActionResult::say(CALCULATION_FAILED_RESPONSE));

        let result = run(IntentId::Calculate, Slots::new().with(Slots::EXPRESSION, "")).unwrap();
        assert_eq!(result, ActionResult::say(CALCULATION_FAILED_RESPONSE));
    }

    #[test]
    fn test_weather_help_greeting_unmatched() {
        assert_eq!(
            run(IntentId::Weather, Slots::new()).unwrap(),
            ActionResult::open(WEATHER_RESPONSE, "https://www.weather.com/")
        );
        assert_eq!(run(IntentId::Help, Slots::new()).unwrap(), ActionResult::say(HELP_RESPONSE));
        assert_eq!(
            run(IntentId::Greeting, Slots::new()).unwrap(),
            ActionResult::say(GREETING_RESPONSE)
        );
        let unmatched = run(IntentId::Unmatched, Slots::new()).unwrap();
        assert!(unmatched.response_text.starts_with("I heard you say: Whatever You Said. "));
        assert!(unmatched.effect.is_none());
    }

    #[test]
    fn test_missing_slot_is_an_error() {
        let err = run(IntentId::Search, Slots::new()).unwrap_err();
        assert_eq!(err, DeskaError::missing_slot("Search", "query"));
    }

    #[test]
    fn test_sanitize_expression() {
        assert_eq!(sanitize_expression("25 * 4"), "25*4");
        assert_eq!(sanitize_expression("alert(1); 2+2"), "(1)2+2");
        assert_eq!(sanitize_expression("the answer"), "");
    }

    #[test]
    fn test_invalid_search_url_rejected() {
        let err = ActionDispatcher::new("nope", "https://www.weather.com").unwrap_err();
        assert!(matches!(err, DeskaError::InvalidUrl { .. }));
    }
}
