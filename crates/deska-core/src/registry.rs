//! Application registry: app key to URL.

use serde::Serialize;

use crate::config::{AppConfig, AssistantConfig, default_apps};

/// A registered application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppEntry {
    pub key: String,
    pub url: String,
}

/// Immutable, ordered mapping from app key to URL.
///
/// Lookup order is insertion order; the first key contained in the query wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRegistry {
    entries: Vec<AppEntry>,
}

impl AppRegistry {
    /// Builds a registry from configured apps. Keys are lowercased and trimmed
    /// so they compare against normalized text.
    pub fn new(apps: &[AppConfig]) -> Self {
        let entries = apps
            .iter()
            .map(|app| AppEntry {
                key: app.name.trim().to_lowercase(),
                url: app.url.clone(),
            })
            .collect();
        Self { entries }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(&config.apps)
    }

    /// Exact lookup by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.url.as_str())
    }

    /// Returns the first registered app whose key occurs within `text`.
    pub fn find_in(&self, text: &str) -> Option<&AppEntry> {
        self.entries.iter().find(|entry| text.contains(entry.key.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new(&default_apps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_lookup() {
        let registry = AppRegistry::default();
        assert_eq!(registry.get("youtube"), Some("https://www.youtube.com"));
        assert_eq!(registry.get("myspace"), None);
    }

    #[test]
    fn test_find_in_uses_registry_order() {
        let registry = AppRegistry::default();
        // "google" is registered before "gmail"
        let entry = registry.find_in("gmail and google").unwrap();
        assert_eq!(entry.key, "google");
        assert!(registry.find_in("the calculator").is_none());
    }

    #[test]
    fn test_keys_are_normalized() {
        let registry = AppRegistry::new(&[AppConfig::new(" Docs ", "https://docs.rs")]);
        assert_eq!(registry.get("docs"), Some("https://docs.rs"));
        assert_eq!(registry.len(), 1);
    }
}
