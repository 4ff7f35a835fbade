//! TOML-based ConfigRepository implementation

use std::fs;
use std::path::{Path, PathBuf};

use deska_core::config::{AssistantConfig, ConfigRepository};
use deska_core::{DeskaError, Result};
use tracing::{debug, info};

use crate::paths::DeskaPaths;

/// Stores the assistant configuration in a TOML file.
///
/// A missing or empty file loads as [`AssistantConfig::default`]; missing
/// keys fall back individually. Loaded configurations are validated.
pub struct TomlConfigRepository {
    path: PathBuf,
}

impl TomlConfigRepository {
    /// Creates a new repository with the default config path (~/.config/deska/config.toml)
    pub fn new() -> Result<Self> {
        let path = DeskaPaths::config_file().map_err(|e| DeskaError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a new repository with a custom config path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl ConfigRepository for TomlConfigRepository {
    fn load(&self) -> Result<AssistantConfig> {
        if !self.path.exists() {
            debug!("[Config] No config at {:?}, using defaults", self.path);
            return Ok(AssistantConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AssistantConfig::default());
        }

        let config: AssistantConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!("[Config] Loaded {} apps from {:?}", config.apps.len(), self.path);
        Ok(config)
    }

    fn save(&self, config: &AssistantConfig) -> Result<()> {
        config.validate()?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(config)?;
        fs::write(&self.path, toml_string)?;
        info!("[Config] Saved config to {:?}", self.path);
        Ok(())
    }
}
