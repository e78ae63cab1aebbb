//! Step observer trait for watching a soft-body update.

use crate::float::Float;

/// Trait for observing soft-body steps.
///
/// Implement this to inspect the fitted rigid motion (debug overlays,
/// profiling, tests). All methods default to no-ops.
pub trait StepObserver<F: Float> {
    /// Called once the best-fit `rotation` (radians, relative to the reference
    /// shape) and per-frame `spin` have been extracted.
    fn on_fit(&mut self, _rotation: F, _spin: F) {}

    /// Called after all points have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
