//! A construction + optimization pipeline with restarts.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constructive::ConstructionStrategy;
use crate::distance::Geometry;
use crate::error::{Error, Result};
use crate::local_search::{LocalSearchStats, OptimizerStrategy};
use crate::models::Tour;

/// One candidate generator: build a tour, improve it, repeat `restarts`
/// times and keep the shortest.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::constructive::ConstructionStrategy;
/// use u_tsp::local_search::OptimizerStrategy;
/// use u_tsp::models::DistanceMetric;
/// use u_tsp::selection::Pipeline;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let pipeline = Pipeline::new(
///     "optimized",
///     ConstructionStrategy::NearestNeighbor { start: None, metric: DistanceMetric::Euclidean },
/// )
/// .with_optimizer(OptimizerStrategy::TwoOpt { max_passes: 100 })
/// .with_restarts(5);
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let candidate = pipeline.run(&g, &mut rng);
/// assert!((candidate.tour.length() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Label used in logs and summaries.
    pub name: String,
    /// How each attempt's tour is built.
    pub construction: ConstructionStrategy,
    /// How each attempt's tour is improved.
    #[serde(default)]
    pub optimizer: OptimizerStrategy,
    /// Number of independent attempts.
    pub restarts: usize,
}

impl Pipeline {
    /// Creates a single-attempt pipeline with no optimization.
    pub fn new(name: impl Into<String>, construction: ConstructionStrategy) -> Self {
        Self {
            name: name.into(),
            construction,
            optimizer: OptimizerStrategy::None,
            restarts: 1,
        }
    }

    /// Sets the optimizer applied to every attempt.
    pub fn with_optimizer(mut self, optimizer: OptimizerStrategy) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Sets the number of attempts.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Checks the pipeline against a geometry of `n` points.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.restarts == 0 {
            return Err(Error::invalid_config(format!(
                "pipeline '{}' needs at least one restart",
                self.name
            )));
        }
        self.construction.validate(n)?;
        self.optimizer.validate()
    }

    /// Runs every attempt and returns the shortest tour found.
    ///
    /// Ties keep the earliest attempt. Call [`validate`](Self::validate)
    /// first.
    pub fn run<R: Rng>(&self, geometry: &Geometry, rng: &mut R) -> Candidate {
        let mut stats = LocalSearchStats::default();
        let mut tour = self.construction.build(geometry, rng);
        stats.absorb(self.optimizer.apply(geometry, &mut tour));

        for _ in 1..self.restarts {
            let mut attempt = self.construction.build(geometry, rng);
            stats.absorb(self.optimizer.apply(geometry, &mut attempt));
            if attempt.is_shorter_than(&tour) {
                tour = attempt;
            }
        }

        debug!(
            "pipeline {}: construction={} optimizer={} restarts={} length={:.4} moves={}/{}",
            self.name,
            self.construction.name(),
            self.optimizer.name(),
            self.restarts,
            tour.length(),
            stats.moves_applied,
            stats.moves_evaluated
        );

        Candidate {
            pipeline: self.name.clone(),
            tour,
            stats,
        }
    }
}

/// The best tour a pipeline produced, with its search counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Name of the pipeline that produced this tour.
    pub pipeline: String,
    /// Best tour across the pipeline's attempts.
    pub tour: Tour,
    /// Local search counters summed over all attempts.
    pub stats: LocalSearchStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{is_complete_tour, tour_length};
    use crate::models::DistanceMetric;

    fn scattered(n: usize) -> Geometry {
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let f = i as f64;
                ((f * 13.7).sin() * 30.0, (f * 4.1).cos() * 30.0)
            })
            .collect();
        Geometry::from_coords(&coords).expect("valid")
    }

    #[test]
    fn test_pipeline_defaults() {
        let p = Pipeline::new("naive", ConstructionStrategy::Randomized);
        assert_eq!(p.restarts, 1);
        assert_eq!(p.optimizer, OptimizerStrategy::None);
    }

    #[test]
    fn test_pipeline_validate() {
        let p = Pipeline::new("random", ConstructionStrategy::Randomized).with_restarts(0);
        assert!(matches!(p.validate(5), Err(Error::InvalidConfig(_))));

        let p = Pipeline::new("swap", ConstructionStrategy::Randomized)
            .with_optimizer(OptimizerStrategy::PairwiseSwap { depth: 0 });
        assert!(p.validate(5).is_err());

        let p = Pipeline::new(
            "nn",
            ConstructionStrategy::NearestNeighbor {
                start: Some(7),
                metric: DistanceMetric::Euclidean,
            },
        );
        assert!(p.validate(5).is_err());
        assert!(p.validate(8).is_ok());
    }

    #[test]
    fn test_restarts_never_worse_than_first_attempt() {
        let g = scattered(30);
        let single = Pipeline::new("random", ConstructionStrategy::Randomized);
        let many = single.clone().with_restarts(50);
        let mut r1 = u_numflow::random::create_rng(17);
        let mut r2 = u_numflow::random::create_rng(17);
        let one = single.run(&g, &mut r1);
        let best = many.run(&g, &mut r2);
        // The first attempt of `many` is the same tour as `one`.
        assert!(best.tour.length() <= one.tour.length());
        assert!(is_complete_tour(&g, best.tour.path()));
    }

    #[test]
    fn test_pipeline_reproducible() {
        let g = scattered(25);
        let p = Pipeline::new(
            "optimized",
            ConstructionStrategy::NearestNeighbor {
                start: None,
                metric: DistanceMetric::Euclidean,
            },
        )
        .with_optimizer(OptimizerStrategy::TwoOpt { max_passes: 100 })
        .with_restarts(4);
        let a = p.run(&g, &mut u_numflow::random::create_rng(5));
        let b = p.run(&g, &mut u_numflow::random::create_rng(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pipeline_stats_accumulate() {
        let g = scattered(20);
        let p = Pipeline::new("swap", ConstructionStrategy::Randomized)
            .with_optimizer(OptimizerStrategy::PairwiseSwap { depth: 1 })
            .with_restarts(3);
        let c = p.run(&g, &mut u_numflow::random::create_rng(9));
        assert_eq!(c.stats.passes, 3);
        assert_eq!(c.stats.moves_evaluated, 3 * 19);
        assert!((c.tour.length() - tour_length(&g, c.tour.path())).abs() < 1e-9);
        assert_eq!(c.pipeline, "swap");
    }

    #[test]
    fn test_run_keeps_earliest_shortest_attempt() {
        let g = scattered(12);
        let p = Pipeline::new("random", ConstructionStrategy::Randomized).with_restarts(6);
        let c = p.run(&g, &mut u_numflow::random::create_rng(31));

        let mut rng = u_numflow::random::create_rng(31);
        let attempts: Vec<Tour> = (0..6)
            .map(|_| ConstructionStrategy::Randomized.build(&g, &mut rng))
            .collect();
        let mut expected = &attempts[0];
        for attempt in &attempts[1..] {
            if attempt.length() < expected.length() {
                expected = attempt;
            }
        }
        assert_eq!(&c.tour, expected);
    }

    #[test]
    fn test_single_restart_is_first_attempt() {
        let g = scattered(10);
        let p = Pipeline::new("random", ConstructionStrategy::Randomized);
        let c = p.run(&g, &mut u_numflow::random::create_rng(2));
        let first = ConstructionStrategy::Randomized.build(&g, &mut u_numflow::random::create_rng(2));
        assert_eq!(c.tour, first);
        assert_eq!(c.stats, LocalSearchStats::default());
    }
}
