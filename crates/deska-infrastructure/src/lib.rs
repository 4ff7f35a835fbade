pub mod opener;
pub mod paths;
pub mod toml_config_repository;

pub use crate::opener::{SystemUrlOpener, executor_for};
pub use crate::paths::DeskaPaths;
pub use crate::toml_config_repository::TomlConfigRepository;
