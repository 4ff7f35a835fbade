//! Path management for deska configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/deska/             # Config directory (platform config dir)
//! └── config.toml              # Assistant configuration
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolution for deska.
pub struct DeskaPaths;

impl DeskaPaths {
    const APP_DIR: &'static str = "deska";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the deska configuration directory (e.g. `~/.config/deska/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_inside_config_dir() {
        // Not every CI sandbox has a home directory
        if let (Ok(dir), Ok(file)) = (DeskaPaths::config_dir(), DeskaPaths::config_file()) {
            assert!(dir.ends_with("deska"));
            assert_eq!(file, dir.join("config.toml"));
        }
    }
}
