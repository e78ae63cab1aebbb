//! Polygon construction, transforms and queries.
//!
//! A polygon is an ordered list of vertices with an implied closing edge from
//! the last vertex back to the first. Nothing here requires a particular
//! winding, but normals point outward for counter-clockwise (y-up) input, and
//! the builders all produce counter-clockwise polygons.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Owned polygon vertex list.
pub type Polygon<F> = AllocVec<Vec2<F>>;

/// Bezier handle ratio, 4/3·(√2 − 1), that makes a [`smooth_rect`] corner
/// approximate a quarter circle.
pub const CIRCULAR_ARC_HANDLE: f32 = 0.552_284_8;

/// Closest boundary point found by [`nearest_index`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeHit<F: Float> {
    /// Edge from vertex `index` to vertex `index + 1` (wrapping).
    pub index: usize,
    /// Position along that edge in `[0, 1]`.
    pub s: F,
    /// Distance from the query point to the boundary point.
    pub distance: F,
}

/// Build a polygon from flat `x0, y0, x1, y1, ...` coordinates.
///
/// # Panics
/// If `coords` has odd length.
pub fn from_coords<F: Float>(coords: &[F]) -> Polygon<F> {
    match try_from_coords(coords) {
        Ok(shape) => shape,
        Err(e) => panic!("{}", e),
    }
}

/// Checked version of [`from_coords`].
pub fn try_from_coords<F: Float>(coords: &[F]) -> Result<Polygon<F>, PhysicsError> {
    if coords.len() % 2 != 0 {
        return Err(PhysicsError::OddCoordinateCount { len: coords.len() });
    }
    Ok(coords.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])).collect())
}

/// Rectangle of size `w` x `h` centered on the origin with Bezier-rounded
/// corners.
///
/// Each corner is a cubic from `(0, r1)` to `(r1, 0)` whose handles sit
/// `r1 * r2` in from the ends, sampled at `div + 2` points. Pass
/// [`CIRCULAR_ARC_HANDLE`] as `r2` for round corners; smaller values give
/// sharper ones.
pub fn smooth_rect<F: Float>(w: F, h: F, r1: F, r2: F, div: usize) -> Polygon<F> {
    let inset = r1 * (F::one() - r2);
    let corner = bezier(
        Vec2::new(F::zero(), r1),
        Vec2::new(F::zero(), inset),
        Vec2::new(inset, F::zero()),
        Vec2::new(r1, F::zero()),
        div,
    );

    let half = Vec2::new(w * F::half(), h * F::half());
    let mut shape = AllocVec::with_capacity(corner.len() * 4);
    // Bottom-left first, then counter-clockwise.
    for turn in 0..4 {
        let offset = Vec2::new(-F::one(), -F::one()).rotate90(turn).component_mul(half);
        shape.extend(corner.iter().map(|&p| p.rotate90(turn) + offset));
    }
    shape
}

/// Regular `div`-gon of radius `r`, first vertex on +X.
pub fn circle<F: Float>(r: F, div: usize) -> Polygon<F> {
    let two_pi = F::two() * F::pi();
    (0..div)
        .map(|i| {
            let angle = two_pi * F::from_usize(i) / F::from_usize(div);
            Vec2::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// Cubic Bezier sampled at `div + 2` evenly spaced parameters, endpoints
/// included.
pub fn bezier<F: Float>(
    p1: Vec2<F>,
    p2: Vec2<F>,
    p3: Vec2<F>,
    p4: Vec2<F>,
    div: usize,
) -> Polygon<F> {
    let three = F::from_f32(3.0);
    let steps = F::from_usize(div + 1);
    (0..div + 2)
        .map(|i| {
            let t = F::from_usize(i) / steps;
            let mt = F::one() - t;
            p1 * (mt * mt * mt)
                + p2 * (three * mt * mt * t)
                + p3 * (three * mt * t * t)
                + p4 * (t * t * t)
        })
        .collect()
}

/// Subdivide every edge longer than `max` so that no edge exceeds it.
///
/// # Panics
/// If `max` is not positive.
pub fn limit_edge<F: Float>(shape: &[Vec2<F>], max: F) -> Polygon<F> {
    match try_limit_edge(shape, max) {
        Ok(shape) => shape,
        Err(e) => panic!("{}", e),
    }
}

/// Checked version of [`limit_edge`].
pub fn try_limit_edge<F: Float>(shape: &[Vec2<F>], max: F) -> Result<Polygon<F>, PhysicsError> {
    if !(max > F::zero()) {
        return Err(PhysicsError::InvalidEdgeLength);
    }
    let n = shape.len();
    let mut out = AllocVec::with_capacity(n);
    for i in 0..n {
        let a = shape[i];
        let edge = shape[(i + 1) % n] - a;
        out.push(a);

        let len = edge.length();
        if len > max {
            let pieces = subdivisions(len, max);
            let whole = F::from_usize(pieces);
            for j in 1..pieces {
                out.push(a + edge * (F::from_usize(j) / whole));
            }
        }
    }
    Ok(out)
}

/// Number of equal pieces an edge of length `len > max` is cut into, never
/// fewer than two.
fn subdivisions<F: Float>(len: F, max: F) -> usize {
    (len / max).ceil().to_usize().max(2)
}

/// `repeat` hand-drawn looking copies of `shape`.
///
/// Every vertex is pushed along its vertex normal by a random amount in
/// `[-amplitude, amplitude)`. The jitter is fully determined by `seed`; feed a
/// frame counter to make the outline wobble from frame to frame.
///
/// # Panics
/// If `repeat` is zero.
pub fn to_sketchy<F: Float>(shape: &[Vec2<F>], repeat: usize, amplitude: F, seed: u64) -> AllocVec<Polygon<F>> {
    match try_to_sketchy(shape, repeat, amplitude, seed) {
        Ok(copies) => copies,
        Err(e) => panic!("{}", e),
    }
}

/// Checked version of [`to_sketchy`].
pub fn try_to_sketchy<F: Float>(
    shape: &[Vec2<F>],
    repeat: usize,
    amplitude: F,
    seed: u64,
) -> Result<AllocVec<Polygon<F>>, PhysicsError> {
    if repeat == 0 {
        return Err(PhysicsError::InvalidRepeat);
    }
    let normals = point_normals(shape);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut copies = AllocVec::with_capacity(repeat);
    for _ in 0..repeat {
        let mut copy = AllocVec::with_capacity(shape.len());
        for (&p, &n) in shape.iter().zip(normals.iter()) {
            let jitter = rng.random::<f32>() * 2.0 - 1.0;
            copy.push(p + n * (amplitude * F::from_f32(jitter)));
        }
        copies.push(copy);
    }
    Ok(copies)
}

/// Unweighted mean of the vertices. Zero for an empty polygon.
pub fn center<F: Float>(shape: &[Vec2<F>]) -> Vec2<F> {
    if shape.is_empty() {
        return Vec2::zero();
    }
    let mut sum = Vec2::zero();
    for &p in shape {
        sum += p;
    }
    sum / F::from_usize(shape.len())
}

/// Point-in-polygon test by counting crossings of a ray toward +X.
///
/// Each edge covers its start vertex but not its end vertex, so a ray
/// through a shared vertex is counted once.
pub fn contains<F: Float>(shape: &[Vec2<F>], p: Vec2<F>) -> bool {
    let n = shape.len();
    let mut crossings = 0usize;
    for i in 0..n {
        let a = shape[i];
        let b = shape[(i + 1) % n];
        // Horizontal edges give a non-finite t and never count.
        let t = (p.y - a.y) / (b.y - a.y);
        if t >= F::zero() && t < F::one() && a.x + (b.x - a.x) * t > p.x {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Unit normal of every edge, edge `i` running from vertex `i` to `i + 1`.
pub fn edge_normals<F: Float>(shape: &[Vec2<F>]) -> Polygon<F> {
    let n = shape.len();
    (0..n)
        .map(|i| (shape[(i + 1) % n] - shape[i]).rotate90(-1).unit())
        .collect()
}

/// Unit normal of every vertex: the normalized sum of its two edge normals.
pub fn point_normals<F: Float>(shape: &[Vec2<F>]) -> Polygon<F> {
    let edges = edge_normals(shape);
    let n = edges.len();
    (0..n)
        .map(|i| (edges[(i + n - 1) % n] + edges[i]).unit())
        .collect()
}

/// Closest point on the polygon boundary to `p`, by brute force over every
/// edge. `None` for an empty polygon.
pub fn nearest_index<F: Float>(shape: &[Vec2<F>], p: Vec2<F>) -> Option<EdgeHit<F>> {
    let n = shape.len();
    let mut best: Option<EdgeHit<F>> = None;
    for i in 0..n {
        let a = shape[i];
        let edge = shape[(i + 1) % n] - a;
        let s = Vec2::nearest(a, edge, p);
        let distance = (a + edge * s).distance(p);
        if best.map_or(true, |hit| distance < hit.distance) {
            best = Some(EdgeHit { index: i, s, distance });
        }
    }
    best
}

/// Signed area by the shoelace formula, positive for counter-clockwise.
pub fn area<F: Float>(shape: &[Vec2<F>]) -> F {
    let n = shape.len();
    let mut sum = F::zero();
    for i in 0..n {
        sum = sum + shape[i].cross(shape[(i + 1) % n]);
    }
    sum * F::half()
}

/// Copy of `shape` moved by `offset`.
pub fn translate<F: Float>(shape: &[Vec2<F>], offset: Vec2<F>) -> Polygon<F> {
    shape.iter().map(|&p| p + offset).collect()
}
