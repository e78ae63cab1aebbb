//! 2D shape-matching soft body.
//!
//! Every step the body finds the rigid rotation that best maps its reference
//! polygon onto the current points, then pulls each point toward the rotated
//! reference with a spring, damps it toward the body's rigid motion and applies
//! friction. The body sags and wobbles when disturbed, but always restores the
//! reference shape.

use crate::config::SoftBodyConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::mass_point::MassPoint;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::shapes::{self, EdgeHit, Polygon};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use log::{debug, trace};

/// A soft body that elastically tracks a reference polygon.
#[derive(Clone, Debug)]
pub struct SoftBody<F: Float> {
    mass_shape: Polygon<F>,
    points: AllocVec<MassPoint<F>>,
    config: SoftBodyConfig<F>,
}

impl<F: Float> SoftBody<F> {
    /// Create a body whose points start on `shape`, at rest, sharing
    /// `mass` equally.
    ///
    /// # Panics
    /// If `shape` is empty or `mass` is not positive and finite.
    pub fn new(shape: &[Vec2<F>], mass: F, config: SoftBodyConfig<F>) -> Self {
        match Self::try_new(shape, mass, config) {
            Ok(body) => body,
            Err(e) => panic!("{}", e),
        }
    }

    /// Checked version of [`new`](SoftBody::new).
    pub fn try_new(shape: &[Vec2<F>], mass: F, config: SoftBodyConfig<F>) -> Result<Self, PhysicsError> {
        if !(mass > F::zero()) || !mass.is_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        if shape.is_empty() {
            return Err(PhysicsError::EmptyShape);
        }

        let point_mass = mass / F::from_usize(shape.len());
        let points = shape.iter().map(|&p| MassPoint::new(p, point_mass)).collect();
        debug!("soft body created: {} points, {} mass each", shape.len(), point_mass);

        Ok(SoftBody {
            mass_shape: shape.to_vec(),
            points,
            config,
        })
    }

    /// Advance the body by `dt` seconds.
    pub fn update(&mut self, dt: F) {
        self.update_observed(dt, &mut NoOpStepObserver);
    }

    /// [`update`](SoftBody::update), reporting each phase to `observer`.
    pub fn update_observed<O: StepObserver<F>>(&mut self, dt: F, observer: &mut O) {
        let n = self.points.len();
        let total_mass = self.points.iter().fold(F::zero(), |acc, p| acc + p.mass);

        // Shape space: both point sets relative to their own mass centroid.
        let mut ref_center = Vec2::zero();
        let mut cur_center = Vec2::zero();
        for (r, p) in self.mass_shape.iter().zip(self.points.iter()) {
            ref_center += *r * p.mass;
            cur_center += p.position * p.mass;
        }
        ref_center = ref_center / total_mass;
        cur_center = cur_center / total_mass;

        let ref_local: AllocVec<Vec2<F>> = self.mass_shape.iter().map(|&r| r - ref_center).collect();
        let cur_local: AllocVec<Vec2<F>> = self.points.iter().map(|p| p.position - cur_center).collect();

        let rotation = circular_mean(
            (0..n).map(|i| cur_local[i].angle() - ref_local[i].angle()),
        );

        let mut bulk_velocity = Vec2::zero();
        for p in &self.points {
            bulk_velocity += p.velocity * p.mass;
        }
        bulk_velocity = bulk_velocity / total_mass;

        // Rotation accumulated over the last frame, seen from where each point
        // would have been one velocity step ago.
        let spin = circular_mean((0..n).map(|i| {
            let prev_local = cur_local[i] - (self.points[i].velocity + bulk_velocity);
            cur_local[i].angle() - prev_local.angle()
        }));

        observer.on_fit(rotation, spin);
        trace!("soft body fit: rotation {} spin {}", rotation, spin);

        let SoftBodyConfig { stiffness, damping, friction } = self.config;
        for (point, &r) in self.points.iter_mut().zip(ref_local.iter()) {
            let target_velocity = r.rotate(spin) + bulk_velocity - r;
            let target_position = r.rotate(rotation) + cur_center;

            let mut target = MassPoint::new(target_position, point.mass);
            point.add_spring_force(&mut target, F::zero(), stiffness, F::zero());
            point.add_force((point.velocity - target_velocity) * -damping);
            point.add_force(point.velocity * -friction);
        }

        for point in self.points.iter_mut() {
            point.update(dt);
        }
        observer.on_integrate();
        observer.on_step_complete();
    }

    /// Current point positions, in order.
    pub fn shape(&self) -> Polygon<F> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Replace the reference polygon. The points keep their positions,
    /// velocities and masses and ease into the new shape over the following
    /// steps.
    ///
    /// # Panics
    /// If `shape` has a different vertex count than the body.
    pub fn set_shape(&mut self, shape: &[Vec2<F>]) {
        if let Err(e) = self.try_set_shape(shape) {
            panic!("{}", e);
        }
    }

    /// Checked version of [`set_shape`](SoftBody::set_shape).
    pub fn try_set_shape(&mut self, shape: &[Vec2<F>]) -> Result<(), PhysicsError> {
        if shape.len() != self.points.len() {
            return Err(PhysicsError::VertexCountMismatch {
                expected: self.points.len(),
                found: shape.len(),
            });
        }
        self.mass_shape.clear();
        self.mass_shape.extend_from_slice(shape);
        debug!("soft body reference shape replaced ({} points)", shape.len());
        Ok(())
    }

    /// The polygon the body is matched against.
    pub fn reference_shape(&self) -> &[Vec2<F>] {
        &self.mass_shape
    }

    /// All mass points, in outline order.
    pub fn points(&self) -> &[MassPoint<F>] {
        &self.points
    }

    /// The mass point at `index`.
    pub fn point(&self, index: usize) -> &MassPoint<F> {
        &self.points[index]
    }

    /// Mutable access for pinning or dragging a point. Changes take effect on
    /// the next [`update`](SoftBody::update).
    pub fn point_mut(&mut self, index: usize) -> &mut MassPoint<F> {
        &mut self.points[index]
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed body.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current coefficients.
    pub fn config(&self) -> &SoftBodyConfig<F> {
        &self.config
    }

    /// Replace the coefficients used from the next step on.
    pub fn set_config(&mut self, config: SoftBodyConfig<F>) {
        self.config = config;
    }

    /// Mass-weighted center of the live points.
    pub fn centroid(&self) -> Vec2<F> {
        let mut sum = Vec2::zero();
        let mut total = F::zero();
        for p in &self.points {
            sum += p.position * p.mass;
            total = total + p.mass;
        }
        sum / total
    }

    /// Add `force` to every point for the next step.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        for p in self.points.iter_mut() {
            p.add_force(force);
        }
    }

    /// Whether `point` lies inside the live outline.
    pub fn contains(&self, point: Vec2<F>) -> bool {
        shapes::contains(&self.shape(), point)
    }

    /// Closest point on the live outline.
    pub fn nearest(&self, point: Vec2<F>) -> Option<EdgeHit<F>> {
        shapes::nearest_index(&self.shape(), point)
    }

    /// Index of the vertex an input layer should grab for `point`: the closer
    /// end of the nearest edge.
    pub fn grab(&self, point: Vec2<F>) -> usize {
        match self.nearest(point) {
            Some(hit) if hit.s > F::half() => (hit.index + 1) % self.points.len(),
            Some(hit) => hit.index,
            None => 0,
        }
    }
}

/// Circular mean of a set of angles: the direction of the sum of their unit
/// vectors. Zero for an empty set.
fn circular_mean<F: Float>(angles: impl Iterator<Item = F>) -> F {
    let mut sum = Vec2::zero();
    for a in angles {
        sum += Vec2::new(a.cos(), a.sin());
    }
    sum.angle()
}
