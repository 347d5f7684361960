//! Domain model types for tour construction.
//!
//! Provides points and the distance conventions used to compare them,
//! tours as cyclic orderings with a cached length, and the clusters used by
//! divide-and-conquer construction.

mod cluster;
mod point;
mod tour;

pub use cluster::Cluster;
pub use point::{DistanceMetric, Point};
pub use tour::Tour;
