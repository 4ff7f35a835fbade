//! Assistant configuration model.
//!
//! Loading and saving live in `deska-infrastructure`; this module only
//! defines the shape and the defaults.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DeskaError, Result};

pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";
pub const DEFAULT_WEATHER_URL: &str = "https://www.weather.com";
pub const DEFAULT_HISTORY_WINDOW: usize = 5;

/// A named web application the assistant can open.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub name: String,
    pub url: String,
}

impl AppConfig {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssistantConfig {
    /// Search engine endpoint; the query is appended as the `q` parameter.
    pub search_url: String,
    pub weather_url: String,
    /// Number of entries shown by the recent-history view.
    pub history_window: usize,
    /// Whether front-ends should actually open requested URLs.
    pub launch_effects: bool,
    /// Registry entries in lookup order.
    #[serde(rename = "app")]
    pub apps: Vec<AppConfig>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            history_window: DEFAULT_HISTORY_WINDOW,
            launch_effects: true,
            apps: default_apps(),
        }
    }
}

/// The built-in application registry.
pub fn default_apps() -> Vec<AppConfig> {
    [
        ("youtube", "https://www.youtube.com"),
        ("google", "https://www.google.com"),
        ("gmail", "https://mail.google.com"),
        ("facebook", "https://www.facebook.com"),
        ("twitter", "https://www.twitter.com"),
        ("github", "https://www.github.com"),
        ("linkedin", "https://www.linkedin.com"),
        ("reddit", "https://www.reddit.com"),
        ("netflix", "https://www.netflix.com"),
        ("spotify", "https://www.spotify.com"),
    ]
    .into_iter()
    .map(|(name, url)| AppConfig::new(name, url))
    .collect()
}

impl AssistantConfig {
    /// Validate the configuration and return the first problem found.
    pub fn validate(&self) -> Result<()> {
        check_url("search_url", &self.search_url)?;
        check_url("weather_url", &self.weather_url)?;

        let mut seen = HashSet::new();
        for app in &self.apps {
            let key = app.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(DeskaError::config("App name cannot be empty"));
            }
            if !seen.insert(key.clone()) {
                return Err(DeskaError::config(format!("Duplicate app name '{}'", key)));
            }
            check_url(&format!("app '{}'", key), &app.url)?;
        }

        Ok(())
    }
}

/// Persistence for [`AssistantConfig`].
pub trait ConfigRepository {
    /// Loads the configuration, falling back to defaults when none is stored.
    fn load(&self) -> Result<AssistantConfig>;

    fn save(&self, config: &AssistantConfig) -> Result<()>;
}

fn check_url(field: &str, value: &str) -> Result<()> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| DeskaError::config(format!("{} is not a valid URL ({}): {}", field, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AssistantConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.apps.len(), 10);
        assert_eq!(config.apps[0].name, "youtube");
        assert_eq!(config.history_window, 5);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: AssistantConfig = toml::from_str(r#"weather_url = "https://wttr.in""#).unwrap();
        assert_eq!(config.weather_url, "https://wttr.in");
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
        assert_eq!(config.apps, default_apps());
    }

    #[test]
    fn test_app_tables_replace_registry() {
        let toml_str = r#"
[[app]]
name = "docs"
url = "https://docs.rs"
"#;
        let config: AssistantConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.apps, vec![AppConfig::new("docs", "https://docs.rs")]);
    }

    #[test]
    fn test_validate_rejects_duplicates_and_bad_urls() {
        let mut config = AssistantConfig::default();
        config.apps.push(AppConfig::new("YouTube", "https://example.com"));
        assert!(config.validate().unwrap_err().is_config());

        let mut config = AssistantConfig::default();
        config.apps = vec![AppConfig::new("  ", "https://example.com")];
        assert!(config.validate().is_err());

        let mut config = AssistantConfig::default();
        config.search_url = "not a url".to_string();
        assert!(config.validate().unwrap_err().is_config());
    }
}
