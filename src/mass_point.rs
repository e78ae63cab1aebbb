//! Point masses with force accumulation and semi-implicit Euler integration.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass. Forces accumulate until [`update`](MassPoint::update)
/// integrates them and clears the accumulator.
///
/// Fields are public so input code can pin or drag a point between steps.
#[derive(Clone, Debug, PartialEq)]
pub struct MassPoint<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub mass: F,
    pub force: Vec2<F>,
}

impl<F: Float> MassPoint<F> {
    /// A point at rest at `position` with no pending force.
    pub fn new(position: Vec2<F>, mass: F) -> Self {
        MassPoint {
            position,
            velocity: Vec2::zero(),
            mass,
            force: Vec2::zero(),
        }
    }

    /// Accumulate `force` for the next [`update`](MassPoint::update).
    pub fn add_force(&mut self, force: Vec2<F>) {
        self.force += force;
    }

    /// Spring-damper between `self` and `other`, applied to both.
    ///
    /// The damper compares the current separation with last frame's, which is
    /// estimated by stepping each point back by its own velocity. It opposes
    /// the change in separation: a pair moving apart is pulled together and a
    /// pair closing in is pushed apart.
    pub fn add_spring_force(&mut self, other: &mut MassPoint<F>, rest_length: F, k: F, c: F) {
        let delta = other.position - self.position;
        let len = delta.length();
        let prev_len = ((other.position - other.velocity) - (self.position - self.velocity)).length();

        let force = delta.unit() * (k * (len - rest_length) + c * (len - prev_len));
        self.add_force(force);
        other.add_force(-force);
    }

    /// `v += f / m * dt`, then `p += v * dt`, then clear the force.
    pub fn update(&mut self, dt: F) {
        self.velocity += self.force / self.mass * dt;
        self.position += self.velocity * dt;
        self.force = Vec2::zero();
    }
}
