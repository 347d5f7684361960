//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor walk, O(n²)
//! - [`random_tour`] — Random permutation with rejection sampling
//! - [`clustered_tour`] — Farthest-point clustering with per-cluster
//!   nearest-neighbor tours, roughly O(n^1.5) for K ≈ √n
//!
//! [`ConstructionStrategy`] selects one of them at runtime.

mod clustered;
mod nearest_neighbor;
mod randomized;

pub use clustered::{clamp_cluster_count, clustered_tour, farthest_point_clusters, ClusterCount};
pub use nearest_neighbor::nearest_neighbor;
pub use randomized::random_tour;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distance::Geometry;
use crate::error::{Error, Result};
use crate::models::{DistanceMetric, Tour};

/// A construction heuristic and its parameters.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::constructive::ConstructionStrategy;
/// use u_tsp::models::DistanceMetric;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let strategy = ConstructionStrategy::NearestNeighbor {
///     start: Some(0),
///     metric: DistanceMetric::Euclidean,
/// };
/// let mut rng = u_numflow::random::create_rng(0);
/// let tour = strategy.build(&g, &mut rng);
/// assert!((tour.length() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstructionStrategy {
    /// Nearest-neighbor walk from `start`, or from a random vertex when
    /// `start` is `None`.
    NearestNeighbor {
        start: Option<usize>,
        #[serde(default)]
        metric: DistanceMetric,
    },
    /// Random permutation.
    Randomized,
    /// Clustered divide-and-conquer.
    Clustered {
        clusters: ClusterCount,
        local_restarts: usize,
        centroid_restarts: usize,
    },
}

impl ConstructionStrategy {
    /// Short identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NearestNeighbor { .. } => "nearest_neighbor",
            Self::Randomized => "randomized",
            Self::Clustered { .. } => "clustered",
        }
    }

    /// Checks the parameters against a geometry of `n` points.
    pub fn validate(&self, n: usize) -> Result<()> {
        match *self {
            Self::NearestNeighbor {
                start: Some(start), ..
            } if start >= n => Err(Error::invalid_config(format!(
                "nearest-neighbor start vertex {start} is out of range for {n} points"
            ))),
            Self::Clustered {
                clusters,
                local_restarts,
                centroid_restarts,
            } => {
                if clusters == ClusterCount::Fixed(0) {
                    return Err(Error::invalid_config("cluster count must be at least 1"));
                }
                if local_restarts == 0 || centroid_restarts == 0 {
                    return Err(Error::invalid_config(
                        "clustered restarts must be at least 1",
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Builds a complete tour over `geometry`.
    ///
    /// # Panics
    ///
    /// Panics if a fixed nearest-neighbor start is out of range; call
    /// [`validate`](Self::validate) first.
    pub fn build<R: Rng>(&self, geometry: &Geometry, rng: &mut R) -> Tour {
        let n = geometry.size();
        match *self {
            Self::NearestNeighbor { start, metric } => {
                let start = start.unwrap_or_else(|| rng.random_range(0..n as u64) as usize);
                nearest_neighbor(geometry, start, metric)
            }
            Self::Randomized => random_tour(geometry, rng),
            Self::Clustered {
                clusters,
                local_restarts,
                centroid_restarts,
            } => clustered_tour(
                geometry,
                clusters.resolve(n),
                local_restarts,
                centroid_restarts,
                rng,
            ),
        }
    }
}
