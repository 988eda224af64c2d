//! Picking the step to visualize.

use tracing::debug;

use crate::error::{StateError, StateResult};

/// The entry at `requested`, or [`StateError::StepOutOfRange`].
///
/// `steps` holds one entry per board column, the state after that column.
pub fn select_step<T>(steps: &[T], requested: usize) -> StateResult<&T> {
    steps.get(requested).ok_or_else(|| {
        debug!(requested, available = steps.len(), "step out of range");
        StateError::StepOutOfRange {
            requested,
            available: steps.len(),
        }
    })
}

/// Pull a step index back inside a board of `num_steps` columns.
///
/// Used when the board is resized and a previously valid index goes stale.
#[inline]
pub fn clamp_step(requested: usize, num_steps: usize) -> usize {
    requested.min(num_steps.saturating_sub(1))
}
