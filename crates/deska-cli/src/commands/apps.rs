use anyhow::Result;
use deska_core::AppRegistry;
use deska_core::config::ConfigRepository;
use deska_infrastructure::TomlConfigRepository;

pub fn run(repository: &TomlConfigRepository) -> Result<()> {
    let registry = AppRegistry::from_config(&repository.load()?);
    let width = registry.iter().map(|app| app.key.len()).max().unwrap_or(0);
    for app in registry.iter() {
        println!("{:<width$}  {}", app.key, app.url, width = width);
    }
    Ok(())
}
