//! Line completion and hints for the REPL.
//!
//! `/` lines complete against builtin commands. `open ...` completes the
//! application key being typed. Anything else is hinted from the example
//! utterances.

/// Completion candidates for the text before the cursor.
///
/// Returns the byte offset the candidates replace from, and the candidates.
pub fn candidates(line: &str, commands: &[String], app_keys: &[String]) -> (usize, Vec<String>) {
    if line.starts_with('/') {
        let matching = commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .cloned()
            .collect();
        return (0, matching);
    }

    if let Some(partial) = app_prefix(line) {
        let start = line.len() - partial.len();
        let lowered = partial.to_lowercase();
        let matching = app_keys
            .iter()
            .filter(|key| key.starts_with(&lowered))
            .cloned()
            .collect();
        return (start, matching);
    }

    (line.len(), Vec::new())
}

/// The app key being typed after a leading "open ", if any.
fn app_prefix(line: &str) -> Option<&str> {
    let (verb, rest) = line.split_once(' ')?;
    if !verb.eq_ignore_ascii_case("open") || rest.contains(' ') {
        return None;
    }
    Some(rest)
}

/// Grey suffix shown after the cursor.
pub fn hint(line: &str, commands: &[String], examples: &[&str]) -> Option<String> {
    if line.is_empty() {
        return None;
    }

    if line.starts_with('/') {
        if line.contains(' ') {
            return None;
        }
        return commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string());
    }

    let lowered = line.to_lowercase();
    examples
        .iter()
        .find(|example| example.len() > line.len() && example.to_lowercase().starts_with(&lowered))
        .and_then(|example| example.get(line.len()..))
        .map(str::to_string)
}
