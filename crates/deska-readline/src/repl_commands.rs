//! Builtin REPL commands.
//!
//! These are handled by the REPL itself and never reach the assistant.
//! They are loaded once at startup and cached for the lifetime of the process.

use std::sync::OnceLock;

/// A builtin REPL command.
#[derive(Debug, Clone)]
pub struct ReplCommand {
    /// Command name (without the leading /)
    pub name: &'static str,
    /// Usage format (e.g., "/history [count]")
    pub usage: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

impl ReplCommand {
    pub const fn new(name: &'static str, usage: &'static str, description: &'static str) -> Self {
        Self {
            name,
            usage,
            description,
        }
    }
}

/// Sample utterances shown by `/examples`.
pub const EXAMPLE_UTTERANCES: [&str; 8] = [
    "What time is it?",
    "What is the date?",
    "Search for AI news",
    "Open YouTube",
    "Calculate 25 times 4",
    "Open Google",
    "What's the weather?",
    "What can you do?",
];

static REPL_COMMANDS: OnceLock<Vec<ReplCommand>> = OnceLock::new();

/// Returns all builtin REPL commands.
pub fn builtin_commands() -> &'static [ReplCommand] {
    REPL_COMMANDS.get_or_init(|| {
        vec![
            ReplCommand::new("help", "/help", "Show REPL commands"),
            ReplCommand::new(
                "history",
                "/history [count]",
                "Show recent commands, most recent first",
            ),
            ReplCommand::new("examples", "/examples", "Show things you can say"),
            ReplCommand::new("apps", "/apps", "List applications that can be opened"),
        ]
    })
}

/// A parsed REPL command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    Help,
    History(Option<usize>),
    Examples,
    Apps,
    Unknown(String),
}

/// Parses a line starting with `/`. Returns `None` for ordinary utterances.
pub fn parse(line: &str) -> Option<ReplAction> {
    let rest = line.trim().strip_prefix('/')?;
    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or("");

    let action = match name {
        "help" => ReplAction::Help,
        "history" => match parts.next() {
            None => ReplAction::History(None),
            Some(count) => match count.parse() {
                Ok(count) => ReplAction::History(Some(count)),
                Err(_) => ReplAction::Unknown(line.trim().to_string()),
            },
        },
        "examples" => ReplAction::Examples,
        "apps" => ReplAction::Apps,
        _ => ReplAction::Unknown(line.trim().to_string()),
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_commands_initialized() {
        let commands = builtin_commands();
        assert!(commands.iter().any(|c| c.name == "history"));
        assert!(commands.iter().all(|c| c.usage.starts_with('/')));
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("what time is it"), None);
        assert_eq!(parse("/help"), Some(ReplAction::Help));
        assert_eq!(parse(" /history "), Some(ReplAction::History(None)));
        assert_eq!(parse("/history 3"), Some(ReplAction::History(Some(3))));
        assert_eq!(
            parse("/history lots"),
            Some(ReplAction::Unknown("/history lots".to_string()))
        );
        assert_eq!(parse("/nope"), Some(ReplAction::Unknown("/nope".to_string())));
    }
}
