use anyhow::{Result, bail};
use deska_core::AssistantConfig;
use deska_core::config::ConfigRepository;
use deska_infrastructure::TomlConfigRepository;

pub fn show(repository: &TomlConfigRepository) -> Result<()> {
    let config = repository.load()?;
    let source = if repository.exists() { "file" } else { "defaults" };
    println!("# {} ({})", repository.path().display(), source);
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn init(repository: &TomlConfigRepository, force: bool) -> Result<()> {
    if repository.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            repository.path().display()
        );
    }
    repository.save(&AssistantConfig::default())?;
    println!("Wrote {}", repository.path().display());
    Ok(())
}
