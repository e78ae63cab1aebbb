//! 2D polygon toolkit and shape-matching soft bodies for games.
//!
//! `softshape` builds and analyzes polygons and simulates elastic bodies that
//! deform under forces and spring back to a target outline. Rendering, input
//! and frame pacing stay with the caller: hand the body a polygon and a `dt`
//! each frame, read back vertex positions to draw.
//!
//! # Features
//!
//! - **Vector math**: `Vec2` with rotation, line intersection and
//!   point-to-segment projection
//! - **Shape builders**: rounded rectangles, circles, Bezier curves,
//!   edge subdivision and hand-drawn "sketchy" jitter
//! - **Shape queries**: centroid, containment, edge/vertex normals, nearest
//!   boundary point
//! - **Soft bodies**: shape matching via best-fit rotation, with spring,
//!   damper and friction forces on semi-implicit Euler point masses
//! - **Observable**: Monitor soft-body steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use softshape::{shapes, SoftBody, SoftBodyConfig, Vec2};
//!
//! let outline = shapes::limit_edge(&shapes::circle(40.0f32, 12), 10.0);
//! let mut body = SoftBody::new(&outline, 1.0, SoftBodyConfig::new().with_stiffness(30.0));
//!
//! // Drag a vertex, then let the body recover.
//! let grabbed = body.grab(Vec2::new(45.0, 0.0));
//! body.point_mut(grabbed).position = Vec2::new(60.0, 0.0);
//! for _ in 0..60 {
//!     body.update(1.0 / 60.0);
//! }
//! assert_eq!(body.shape().len(), outline.len());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod shapes;
pub mod mass_point;
pub mod softbody;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use shapes::{EdgeHit, Polygon};
pub use mass_point::MassPoint;
pub use softbody::SoftBody;
pub use config::SoftBodyConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
