use std::sync::Arc;

use anyhow::{Context, Result};
use deska_core::config::ConfigRepository;
use deska_core::{SessionController, SystemClock};
use deska_infrastructure::{TomlConfigRepository, executor_for};

/// Runs a single turn through a fresh session.
pub fn run(repository: &TomlConfigRepository, utterance: &str, json: bool, no_open: bool) -> Result<()> {
    let config = repository.load().context("Failed to load config")?;
    let mut session = SessionController::new(&config, Arc::new(SystemClock))?;
    let executor = executor_for(config.launch_effects && !no_open);

    let result = session.submit(utterance);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.response_text);
    }

    if let Some(effect) = &result.effect {
        if !json {
            println!("({})", effect);
        }
        // The answer stands even when the opener fails
        if executor.execute(effect).is_err() {
            eprintln!("Could not {}", effect);
        }
    }

    Ok(())
}
