//! Solver configuration.
//!
//! Every budget (restart counts, pass ceilings, swap depth, cluster count)
//! is a parameter here rather than a constant in the heuristics. The
//! configuration is validated once, before any pipeline runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constructive::{ClusterCount, ConstructionStrategy};
use crate::error::{Error, Result};
use crate::local_search::OptimizerStrategy;
use crate::models::DistanceMetric;
use crate::selection::Pipeline;

/// Budgets and switches for the default pipeline set.
///
/// # Examples
///
/// ```
/// use u_tsp::config::SolverConfig;
/// use u_tsp::constructive::ClusterCount;
///
/// let config = SolverConfig::default()
///     .with_seed(7)
///     .with_random_restarts(200)
///     .with_clusters(ClusterCount::Fixed(4));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.pipelines().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Base seed; each pipeline derives its own generator from it.
    pub seed: u64,
    /// Random tours tried by the `random` pipeline.
    pub random_restarts: usize,
    /// Nearest-neighbor + 2-opt attempts from random starts.
    pub optimized_restarts: usize,
    /// Pass ceiling for 2-opt.
    pub two_opt_max_passes: usize,
    /// Positions considered by the pairwise swap optimizer.
    pub swap_depth: usize,
    /// Random + pairwise swap attempts; 0 disables the `swap` pipeline.
    pub swap_restarts: usize,
    /// Cluster count for clustered construction.
    pub clusters: ClusterCount,
    /// Nearest-neighbor attempts inside each cluster.
    pub cluster_local_restarts: usize,
    /// Starting clusters tried when ordering centroids.
    pub centroid_restarts: usize,
    /// Distance convention for nearest-neighbor comparisons.
    pub metric: DistanceMetric,
    /// Run pipelines on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            random_restarts: 1_000,
            optimized_restarts: 10,
            two_opt_max_passes: 1_000,
            swap_depth: 2,
            swap_restarts: 0,
            clusters: ClusterCount::SqrtN,
            cluster_local_restarts: 3,
            centroid_restarts: 5,
            metric: DistanceMetric::Euclidean,
            parallel: false,
        }
    }
}

impl SolverConfig {
    /// Loads a configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config)
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of random tours tried by `random`.
    pub fn with_random_restarts(mut self, restarts: usize) -> Self {
        self.random_restarts = restarts;
        self
    }

    /// Sets the number of nearest-neighbor + 2-opt attempts.
    pub fn with_optimized_restarts(mut self, restarts: usize) -> Self {
        self.optimized_restarts = restarts;
        self
    }

    /// Sets the 2-opt pass ceiling.
    pub fn with_two_opt_max_passes(mut self, passes: usize) -> Self {
        self.two_opt_max_passes = passes;
        self
    }

    /// Sets the pairwise swap depth.
    pub fn with_swap_depth(mut self, depth: usize) -> Self {
        self.swap_depth = depth;
        self
    }

    /// Sets the `swap` pipeline attempts; 0 disables it.
    pub fn with_swap_restarts(mut self, restarts: usize) -> Self {
        self.swap_restarts = restarts;
        self
    }

    /// Sets the cluster count for clustered construction.
    pub fn with_clusters(mut self, clusters: ClusterCount) -> Self {
        self.clusters = clusters;
        self
    }

    /// Sets the nearest-neighbor attempts made inside each cluster.
    pub fn with_cluster_local_restarts(mut self, restarts: usize) -> Self {
        self.cluster_local_restarts = restarts;
        self
    }

    /// Sets the starting clusters tried when ordering centroids.
    pub fn with_centroid_restarts(mut self, restarts: usize) -> Self {
        self.centroid_restarts = restarts;
        self
    }

    /// Sets the neighbor comparison metric.
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Runs pipelines on the rayon pool when `true`.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rejects zero budgets and a zero cluster count.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("random_restarts", self.random_restarts),
            ("optimized_restarts", self.optimized_restarts),
            ("two_opt_max_passes", self.two_opt_max_passes),
            ("swap_depth", self.swap_depth),
            ("cluster_local_restarts", self.cluster_local_restarts),
            ("centroid_restarts", self.centroid_restarts),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(Error::invalid_config(format!("{name} must be at least 1")));
            }
        }
        if self.clusters == ClusterCount::Fixed(0) {
            return Err(Error::invalid_config("clusters must be at least 1"));
        }
        Ok(())
    }

    /// The default pipeline set, in submission order:
    ///
    /// 1. `naive` — nearest-neighbor from vertex 0
    /// 2. `random` — best of `random_restarts` random tours
    /// 3. `optimized` — best of `optimized_restarts` nearest-neighbor tours
    ///    from random starts, each improved by 2-opt
    /// 4. `clustered` — clustered divide-and-conquer, no optimization
    /// 5. `swap` — random tours improved by pairwise swap (only when
    ///    `swap_restarts > 0`)
    pub fn pipelines(&self) -> Vec<Pipeline> {
        let mut pipelines = vec![
            Pipeline::new(
                "naive",
                ConstructionStrategy::NearestNeighbor {
                    start: Some(0),
                    metric: self.metric,
                },
            ),
            Pipeline::new("random", ConstructionStrategy::Randomized)
                .with_restarts(self.random_restarts),
            Pipeline::new(
                "optimized",
                ConstructionStrategy::NearestNeighbor {
                    start: None,
                    metric: self.metric,
                },
            )
            .with_optimizer(OptimizerStrategy::TwoOpt {
                max_passes: self.two_opt_max_passes,
            })
            .with_restarts(self.optimized_restarts),
            Pipeline::new(
                "clustered",
                ConstructionStrategy::Clustered {
                    clusters: self.clusters,
                    local_restarts: self.cluster_local_restarts,
                    centroid_restarts: self.centroid_restarts,
                },
            ),
        ];
        if self.swap_restarts > 0 {
            pipelines.push(
                Pipeline::new("swap", ConstructionStrategy::Randomized)
                    .with_optimizer(OptimizerStrategy::PairwiseSwap {
                        depth: self.swap_depth,
                    })
                    .with_restarts(self.swap_restarts),
            );
        }
        pipelines
    }
}
