//! Opens requested URLs with the platform's default handler.

use std::process::{Command, Stdio};

use deska_core::action::{Effect, EffectExecutor, NoopExecutor};
use deska_core::{DeskaError, Result};
use tracing::{debug, warn};

/// Executes [`Effect::OpenUrl`] by spawning the OS opener.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl SystemUrlOpener {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, url: &str) -> Result<()> {
        debug!("[Opener] Opening {}", url);
        platform_open(url)
    }
}

/// Picks the executor front-ends use for every turn of a run.
///
/// With `launch` off, effects are only logged by a [`NoopExecutor`].
pub fn executor_for(launch: bool) -> Box<dyn EffectExecutor> {
    if launch {
        Box::new(SystemUrlOpener::new())
    } else {
        Box::new(NoopExecutor)
    }
}

#[cfg(target_os = "macos")]
fn platform_open(url: &str) -> Result<()> {
    spawn_detached("open", &[url])
}

#[cfg(target_os = "windows")]
fn platform_open(url: &str) -> Result<()> {
    // The empty string is the window title expected by `start`
    spawn_detached("cmd", &["/C", "start", "", url])
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_open(url: &str) -> Result<()> {
    let openers: [(&str, &[&str]); 3] = [
        ("xdg-open", &[]),
        ("gio", &["open"]),
        ("sensible-browser", &[]),
    ];

    for (program, prefix) in openers {
        let mut args: Vec<&str> = prefix.to_vec();
        args.push(url);
        if spawn_detached(program, &args).is_ok() {
            return Ok(());
        }
    }

    Err(DeskaError::io(format!("No URL opener found for {}", url)))
}

fn spawn_detached(program: &str, args: &[&str]) -> Result<()> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| DeskaError::io(format!("Failed to run {}: {}", program, e)))
}

impl EffectExecutor for SystemUrlOpener {
    fn execute(&self, effect: &Effect) -> Result<()> {
        match effect {
            Effect::OpenUrl(url) => self.open(url).inspect_err(|e| {
                warn!("[Opener] {}", e);
            }),
        }
    }
}
