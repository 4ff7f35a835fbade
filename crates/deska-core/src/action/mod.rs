//! Per-intent actions.
//!
//! The dispatcher turns a matched intent into an [`ActionResult`]. It never
//! performs side effects itself: opening a URL is returned as an [`Effect`]
//! request for an [`EffectExecutor`] owned by the caller.

pub mod dispatcher;
pub mod effect;
pub mod model;

pub use dispatcher::{ActionDispatcher, DispatchContext};
pub use effect::{EffectExecutor, NoopExecutor};
pub use model::{ActionResult, Effect};
