use deska_core::config::{AppConfig, AssistantConfig, ConfigRepository};
use deska_infrastructure::TomlConfigRepository;
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlConfigRepository::with_path(temp_dir.path().join("config.toml"));

    let config = repo.load().expect("Should load defaults");
    assert_eq!(config, AssistantConfig::default());
    assert!(!repo.exists());
}

#[test]
fn test_empty_file_loads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "  \n").unwrap();

    let config = TomlConfigRepository::with_path(path).load().unwrap();
    assert_eq!(config, AssistantConfig::default());
}

#[test]
fn test_save_and_load_config() {
    let temp_dir = TempDir::new().unwrap();
    // Nested directory is created on save
    let repo = TomlConfigRepository::with_path(temp_dir.path().join("deska").join("config.toml"));

    let config = AssistantConfig {
        search_url: "https://duckduckgo.com/".to_string(),
        history_window: 3,
        launch_effects: false,
        apps: vec![
            AppConfig::new("docs", "https://docs.rs"),
            AppConfig::new("crates", "https://crates.io"),
        ],
        ..AssistantConfig::default()
    };

    repo.save(&config).expect("Should save config");
    assert!(repo.exists());

    let loaded = repo.load().expect("Should load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.apps[1].name, "crates");
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "history_window = \"many\"").unwrap();

    let err = TomlConfigRepository::with_path(path).load().unwrap_err();
    assert!(err.is_serialization());
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[[app]]
name = "docs"
url = "not a url"
"#,
    )
    .unwrap();

    let repo = TomlConfigRepository::with_path(path);
    assert!(repo.load().unwrap_err().is_config());

    let mut config = AssistantConfig::default();
    config.weather_url = String::new();
    assert!(repo.save(&config).is_err());
}
