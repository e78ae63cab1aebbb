//! Error types for shape construction and soft-body setup.
//!
//! The panicking entry points (`SoftBody::new`, `shapes::limit_edge`, ...)
//! treat these as programmer errors. Their `try_*` twins hand them back.

use core::fmt;

/// Contract violations detected by the checked constructors and transforms.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// A soft body needs at least one vertex.
    EmptyShape,
    /// Flat coordinate lists must hold x/y pairs.
    OddCoordinateCount { len: usize },
    /// Replacement shape has a different vertex count than the body.
    VertexCountMismatch { expected: usize, found: usize },
    /// Maximum edge length must be positive.
    InvalidEdgeLength,
    /// At least one sketchy copy must be requested.
    InvalidRepeat,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::EmptyShape => write!(f, "soft body needs at least one vertex"),
            PhysicsError::OddCoordinateCount { len } => {
                write!(f, "coordinate list has odd length {}", len)
            }
            PhysicsError::VertexCountMismatch { expected, found } => {
                write!(f, "shape has {} vertices, body has {}", found, expected)
            }
            PhysicsError::InvalidEdgeLength => write!(f, "maximum edge length must be positive"),
            PhysicsError::InvalidRepeat => write!(f, "repeat count must be at least 1"),
        }
    }
}
