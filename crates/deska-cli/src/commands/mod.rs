use std::path::PathBuf;

use anyhow::Result;
use deska_infrastructure::TomlConfigRepository;

pub mod apps;
pub mod ask;
pub mod calc;
pub mod config;

/// Config repository for an explicit path, or the default location.
pub fn repository(path: Option<PathBuf>) -> Result<TomlConfigRepository> {
    match path {
        Some(path) => Ok(TomlConfigRepository::with_path(path)),
        None => Ok(TomlConfigRepository::new()?),
    }
}
