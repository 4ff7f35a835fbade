use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::EnvFilter;

use deska_core::config::ConfigRepository;
use deska_core::{AssistantConfig, SessionController, SystemClock};
use deska_infrastructure::{TomlConfigRepository, executor_for};

mod completion;
mod repl_commands;

use repl_commands::{EXAMPLE_UTTERANCES, ReplAction, builtin_commands};

/// Rustyline helper: completes commands and app names, hints example utterances.
#[derive(Clone)]
struct DeskaHelper {
    commands: Vec<String>,
    app_keys: Vec<String>,
}

impl DeskaHelper {
    fn new(session: &SessionController) -> Self {
        Self {
            commands: builtin_commands()
                .iter()
                .map(|cmd| format!("/{}", cmd.name))
                .collect(),
            app_keys: session.registry().iter().map(|app| app.key.clone()).collect(),
        }
    }
}

impl Helper for DeskaHelper {}

impl Completer for DeskaHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, found) = completion::candidates(&line[..pos], &self.commands, &self.app_keys);
        let pairs = found
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for DeskaHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for DeskaHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        completion::hint(line, &self.commands, &EXAMPLE_UTTERANCES)
    }
}

impl Validator for DeskaHelper {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> AssistantConfig {
    let loaded = TomlConfigRepository::new().and_then(|repository| repository.load());
    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("Config error: {} (using defaults)", e).yellow());
            AssistantConfig::default()
        }
    }
}

fn print_history(session: &SessionController, count: Option<usize>) {
    let entries = session.recent(count.unwrap_or_else(|| session.history_window()));
    if entries.is_empty() {
        println!("{}", "No commands yet.".bright_black());
        return;
    }

    println!("{}", "Recent Commands".bright_magenta().bold());
    for entry in entries {
        println!(
            "{}",
            entry
                .timestamp
                .format("%I:%M:%S %p")
                .to_string()
                .bright_black()
        );
        println!("  {} {}", "Command:".bold(), entry.utterance);
        println!("  {} {}", "Response:".bold(), entry.response_text.bright_blue());
    }
}

fn handle_repl_action(action: ReplAction, session: &SessionController) {
    match action {
        ReplAction::Help => {
            for cmd in builtin_commands() {
                println!("  {:<18} {}", cmd.usage.bright_cyan(), cmd.description);
            }
            println!(
                "{}",
                "Anything else is sent to the assistant. Type 'quit' to exit.".bright_black()
            );
        }
        ReplAction::History(count) => print_history(session, count),
        ReplAction::Examples => {
            for example in EXAMPLE_UTTERANCES {
                println!("  {}", example.yellow());
            }
        }
        ReplAction::Apps => {
            for app in session.registry().iter() {
                println!("  {:<10} {}", app.key.bright_cyan(), app.url);
            }
        }
        ReplAction::Unknown(line) => {
            println!("{}", format!("Unknown command: {} (try /help)", line).bright_black());
        }
    }
}

/// The main entry point for the deska REPL.
///
/// Each line is either a builtin `/command` or an utterance submitted to a
/// single [`SessionController`]. Responses are printed; requested URLs are
/// opened when `launch_effects` is enabled.
fn main() -> Result<()> {
    init_tracing();

    // ===== Session Initialization =====
    let config = load_config();
    let mut session = SessionController::new(&config, Arc::new(SystemClock))?;
    let executor = executor_for(config.launch_effects);

    // ===== REPL Setup =====
    let helper = DeskaHelper::new(&session);
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Deska Desk Assistant ===".bright_magenta().bold());
    println!(
        "{}",
        "Ask for the time, a search, an app or a calculation. '/help' for commands, 'quit' to exit."
            .bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Some(action) = repl_commands::parse(trimmed) {
                    handle_repl_action(action, &session);
                    continue;
                }

                println!("{}", format!("> {}", trimmed).green());

                let result = session.submit(trimmed);
                for line in result.response_text.lines() {
                    println!("{}", line.bright_blue());
                }

                if let Some(effect) = &result.effect {
                    println!("{}", format!("({})", effect).bright_black());
                    if executor.execute(effect).is_err() {
                        println!("{}", format!("Could not {}", effect).yellow());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
