//! The per-session entry point.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tracing::{error, info};
use uuid::Uuid;

use crate::action::{ActionDispatcher, ActionResult, DispatchContext};
use crate::clock::{Clock, SystemClock};
use crate::config::AssistantConfig;
use crate::error::{DeskaError, Result};
use crate::history::{HistoryEntry, InteractionHistory};
use crate::intent::{IntentCatalog, IntentId};
use crate::normalize::normalize;
use crate::registry::AppRegistry;

/// Orchestrates one assistant session.
///
/// Each controller owns its catalog, registry and history; nothing is shared
/// between sessions. Turns are processed one at a time through
/// [`submit`](Self::submit), which always yields a response and always
/// records exactly one history entry.
pub struct SessionController {
    id: String,
    created_at: DateTime<FixedOffset>,
    catalog: IntentCatalog,
    registry: AppRegistry,
    dispatcher: ActionDispatcher,
    clock: Arc<dyn Clock>,
    history: InteractionHistory,
    history_window: usize,
}

impl SessionController {
    /// Creates a session from configuration, using the standard catalog.
    pub fn new(config: &AssistantConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let dispatcher = ActionDispatcher::from_config(config)?;
        let mut session = Self::with_parts(
            IntentCatalog::standard(),
            AppRegistry::from_config(config),
            dispatcher,
            clock,
        );
        session.history_window = config.history_window;
        Ok(session)
    }

    /// Creates a session with default configuration and the system clock.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&AssistantConfig::default(), Arc::new(SystemClock))
    }

    /// Creates a session from explicit parts.
    pub fn with_parts(
        catalog: IntentCatalog,
        registry: AppRegistry,
        dispatcher: ActionDispatcher,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let created_at = clock.now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at,
            catalog,
            registry,
            dispatcher,
            clock,
            history: InteractionHistory::new(),
            history_window: crate::config::DEFAULT_HISTORY_WINDOW,
        }
    }

    /// Processes one utterance and records it.
    ///
    /// Dispatch errors and panics are contained here and answered with
    /// [`ActionResult::APOLOGY`]; the turn is still recorded. A contained
    /// panic is logged as [`DeskaError::Internal`]. The process panic hook
    /// belongs to the front-end, so the default hook still prints the panic
    /// message to stderr.
    pub fn submit(&mut self, raw_utterance: &str) -> ActionResult {
        let now = self.clock.now();
        let text = normalize(raw_utterance);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let intent = self.catalog.match_text(&text, &self.registry);
            let ctx = DispatchContext {
                utterance: raw_utterance,
                now,
                registry: &self.registry,
            };
            self.dispatcher
                .dispatch(&intent, &ctx)
                .map(|result| (intent.id, result))
        }))
        .unwrap_or_else(|payload| Err(panic_error(payload)));

        let result = match outcome {
            Ok((intent, result)) => {
                self.log_turn(intent, &result);
                result
            }
            Err(e) => {
                error!("[Session {}] Dispatch failed for '{}': {}", self.id, raw_utterance, e);
                ActionResult::apology()
            }
        };

        self.history
            .append(HistoryEntry::new(raw_utterance, result.response_text.as_str(), now));
        result
    }

    fn log_turn(&self, intent: IntentId, result: &ActionResult) {
        match &result.effect {
            Some(effect) => info!("[Session {}] {} -> {}", self.id, intent, effect),
            None => info!("[Session {}] {} answered", self.id, intent),
        }
    }

    /// Up to the last `k` turns, most recent first.
    pub fn recent(&self, k: usize) -> Vec<&HistoryEntry> {
        self.history.recent(k)
    }

    /// The recent-turns view sized by the configured window.
    pub fn recent_default(&self) -> Vec<&HistoryEntry> {
        self.history.recent(self.history_window)
    }

    pub fn history(&self) -> &InteractionHistory {
        &self.history
    }

    pub fn history_window(&self) -> usize {
        self.history_window
    }

    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }
}

/// Turns a caught panic payload into an internal error.
fn panic_error(payload: Box<dyn Any + Send>) -> DeskaError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    DeskaError::internal(format!("dispatch panicked: {}", message))
}
