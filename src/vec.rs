//! 2D vector type and the geometric primitives built on it.

use crate::float::Float;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Below this length `unit()` stops dividing and falls back to +X.
const UNIT_EPSILON: f32 = 1e-6;

/// 2D vector used for positions, velocities, forces and polygon vertices.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (returns scalar): self.x * other.y - self.y * other.x
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Unit vector in the same direction.
    ///
    /// Vectors shorter than 1e-6 have no usable direction and map to exactly
    /// `(1, 0)` instead of blowing up.
    pub fn unit(self) -> Self {
        let len = self.length();
        if len < F::from_f32(UNIT_EPSILON) {
            Vec2::new(F::one(), F::zero())
        } else {
            self / len
        }
    }

    /// Rotate counter-clockwise by `r` radians.
    pub fn rotate(self, r: F) -> Self {
        let (sin, cos) = (r.sin(), r.cos());
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Rotate by `r` quarter turns. Exact, and any integer works: -1 is the
    /// same as 3.
    pub fn rotate90(self, r: i32) -> Self {
        match r.rem_euclid(4) {
            0 => self,
            1 => Vec2 { x: -self.y, y: self.x },
            2 => Vec2 { x: -self.x, y: -self.y },
            _ => Vec2 { x: self.y, y: -self.x },
        }
    }

    /// Angle of the vector in radians, `atan2(y, x)`.
    pub fn angle(self) -> F {
        F::atan2(self.y, self.x)
    }

    /// Component-wise multiplication.
    pub fn component_mul(self, other: Self) -> Self {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }

    /// Parameter `s` such that `ap + av * s` lies on the line through `bp`
    /// with direction `bv`.
    ///
    /// Parallel lines give NaN or an infinity; callers that can hit that case
    /// have to check for it.
    pub fn intersection(ap: Self, av: Self, bp: Self, bv: Self) -> F {
        (bp - ap).cross(bv) / av.cross(bv)
    }

    /// Parameter in `[0, 1]` of the point on segment `lp -> lp + lv` closest
    /// to `p`. A degenerate segment yields 0.
    pub fn nearest(lp: Self, lv: Self, p: Self) -> F {
        let s = Self::intersection(lp, lv, p, lv.rotate90(1));
        if s.is_nan() {
            return F::zero();
        }
        s.clamp(F::zero(), F::one())
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;
    fn div(self, s: F) -> Self { Vec2 { x: self.x / s, y: self.y / s } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}
