//! Coefficients for the shape-matching soft body.

use crate::float::Float;

/// Spring, damper and friction coefficients of a [`SoftBody`](crate::SoftBody).
///
/// # Builder Pattern
/// ```
/// use softshape::config::SoftBodyConfig;
///
/// let config: SoftBodyConfig<f32> = SoftBodyConfig::new()
///     .with_stiffness(40.0)
///     .with_damping(2.0)
///     .with_friction(0.1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SoftBodyConfig<F: Float> {
    /// Spring constant `k` pulling each point toward its matched target.
    /// Default: 1.0.
    pub stiffness: F,
    /// Damper constant `c` pulling each velocity toward the rigid-motion
    /// velocity. Default: 0.0.
    pub damping: F,
    /// Friction coefficient applied against each point's velocity.
    /// Default: 0.0.
    pub friction: F,
}

impl<F: Float> SoftBodyConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SoftBodyConfig {
            stiffness: F::one(),
            damping: F::zero(),
            friction: F::zero(),
        }
    }

    /// Set the spring constant.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the damper constant.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the friction coefficient.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }
}

impl<F: Float> Default for SoftBodyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
