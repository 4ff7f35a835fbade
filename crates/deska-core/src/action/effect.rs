//! Effect execution seam.

use tracing::info;

use super::model::Effect;
use crate::error::Result;

/// Performs an [`Effect`] on behalf of a front-end.
///
/// Failures are the executor's concern; they are never fed back into the
/// session that produced the effect.
pub trait EffectExecutor: Send + Sync {
    fn execute(&self, effect: &Effect) -> Result<()>;
}

/// Executor that only logs the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExecutor;

impl EffectExecutor for NoopExecutor {
    fn execute(&self, effect: &Effect) -> Result<()> {
        info!("[Effect] Skipping {}", effect);
        Ok(())
    }
}
