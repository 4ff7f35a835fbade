//! Command interpretation and dispatch engine for the Deska desk assistant.
//!
//! One utterance goes in, one [`ActionResult`] comes out:
//!
//! ```text
//! utterance -> normalize -> IntentCatalog -> ActionDispatcher -> ActionResult
//!                                                            \-> InteractionHistory
//! ```
//!
//! # Examples
//!
//! ```
//! use deska_core::SessionController;
//!
//! let mut session = SessionController::with_defaults().unwrap();
//! let result = session.submit("calculate 25 times 4");
//! assert_eq!(result.response_text, "The result is 100");
//! assert_eq!(session.recent(5).len(), 1);
//! ```

pub mod action;
pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod intent;
pub mod math;
pub mod normalize;
pub mod registry;
pub mod session;

pub use action::{ActionResult, Effect, EffectExecutor};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AssistantConfig;
pub use error::{DeskaError, Result};
pub use history::{HistoryEntry, InteractionHistory};
pub use intent::{IntentCatalog, IntentId};
pub use registry::AppRegistry;
pub use session::SessionController;
