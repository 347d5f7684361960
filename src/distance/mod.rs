//! Point geometry and distance computation.
//!
//! Provides the shared, read-only point set every heuristic works against.

mod geometry;

pub use geometry::Geometry;
