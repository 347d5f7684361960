//! Best-of-pipelines candidate selection.

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::SolverConfig;
use crate::distance::Geometry;
use crate::error::{Error, Result};
use crate::evaluation::longest_edge;
use crate::models::Tour;

use super::pipeline::{Candidate, Pipeline};

/// Runs a set of pipelines and keeps the shortest tour.
///
/// Every pipeline gets its own generator seeded from the base seed and the
/// pipeline's position, so results depend only on the seed and the
/// pipeline list, whether pipelines run sequentially or on the rayon pool.
/// Ties go to the earliest pipeline in submission order.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::config::SolverConfig;
/// use u_tsp::selection::CandidateSelector;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let config = SolverConfig::default().with_random_restarts(50);
/// let selector = CandidateSelector::from_config(&config);
///
/// let outcome = selector.select(&g).unwrap();
/// assert!((outcome.best_tour().length() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CandidateSelector {
    pipelines: Vec<Pipeline>,
    seed: u64,
    parallel: bool,
}

impl CandidateSelector {
    /// Creates a sequential selector over the given pipelines.
    pub fn new(pipelines: Vec<Pipeline>, seed: u64) -> Self {
        Self {
            pipelines,
            seed,
            parallel: false,
        }
    }

    /// Creates a selector running the default pipelines for `config`.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.pipelines(), config.seed).with_parallel(config.parallel)
    }

    /// Runs pipelines on the rayon thread pool when `parallel` is set.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Pipelines in submission order.
    pub fn pipelines(&self) -> &[Pipeline] {
        &self.pipelines
    }

    /// Runs every pipeline over `geometry` and returns all candidates with
    /// the index of the shortest.
    ///
    /// Returns [`Error::InvalidConfig`] if there are no pipelines or one of
    /// them is invalid for this geometry. Nothing runs in that case.
    pub fn select(&self, geometry: &Geometry) -> Result<SelectionOutcome> {
        if self.pipelines.is_empty() {
            return Err(Error::invalid_config("no pipelines to run"));
        }
        for pipeline in &self.pipelines {
            pipeline.validate(geometry.size())?;
        }

        let run = |(index, pipeline): (usize, &Pipeline)| {
            let mut rng = u_numflow::random::create_rng(pipeline_seed(self.seed, index));
            pipeline.run(geometry, &mut rng)
        };
        let candidates: Vec<Candidate> = if self.parallel {
            self.pipelines.par_iter().enumerate().map(run).collect()
        } else {
            self.pipelines.iter().enumerate().map(run).collect()
        };

        let mut best_index = 0;
        for (index, candidate) in candidates.iter().enumerate() {
            info!(
                "{} tour distance: {:.4}",
                candidate.pipeline,
                candidate.tour.length()
            );
            if candidate.tour.is_shorter_than(&candidates[best_index].tour) {
                best_index = index;
            }
        }

        let best = &candidates[best_index];
        if let Some((pos, len)) = longest_edge(geometry, best.tour.path()) {
            debug!("best tour longest edge: position={pos} length={len:.4}");
        }
        info!(
            "selected {} (n={} length={:.4})",
            best.pipeline,
            geometry.size(),
            best.tour.length()
        );

        Ok(SelectionOutcome {
            best_index,
            candidates,
        })
    }
}

/// Seed for the pipeline at `index`, mixed with a golden-ratio increment
/// so neighboring pipelines get unrelated streams.
pub fn pipeline_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add((index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Every pipeline's best tour, plus which one won.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionOutcome {
    best_index: usize,
    candidates: Vec<Candidate>,
}

impl SelectionOutcome {
    /// Index of the winning candidate.
    pub fn best_index(&self) -> usize {
        self.best_index
    }

    /// The winning candidate.
    pub fn best(&self) -> &Candidate {
        &self.candidates[self.best_index]
    }

    /// The winning tour.
    pub fn best_tour(&self) -> &Tour {
        &self.best().tour
    }

    /// All candidates in pipeline submission order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Consumes the outcome, returning the winning tour.
    pub fn into_best_tour(mut self) -> Tour {
        self.candidates.swap_remove(self.best_index).tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::ConstructionStrategy;
    use crate::evaluation::is_complete_tour;
    use crate::local_search::OptimizerStrategy;
    use crate::models::DistanceMetric;

    fn scattered(n: usize) -> Geometry {
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let f = i as f64;
                ((f * 9.13).sin() * 40.0, (f * 3.77).cos() * 40.0)
            })
            .collect();
        Geometry::from_coords(&coords).expect("valid")
    }

    fn square() -> Geometry {
        Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).expect("valid")
    }

    fn nn_from(start: usize) -> ConstructionStrategy {
        ConstructionStrategy::NearestNeighbor {
            start: Some(start),
            metric: DistanceMetric::Euclidean,
        }
    }

    #[test]
    fn test_select_minimum_of_candidates() {
        let g = scattered(40);
        let selector = CandidateSelector::from_config(
            &SolverConfig::default()
                .with_random_restarts(20)
                .with_optimized_restarts(3),
        );
        let outcome = selector.select(&g).expect("valid");
        let min = outcome
            .candidates()
            .iter()
            .map(|c| c.tour.length())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(outcome.best_tour().length(), min);
        assert_eq!(
            outcome.best_tour(),
            &outcome.candidates()[outcome.best_index()].tour
        );
        assert!(is_complete_tour(&g, outcome.best_tour().path()));
    }

    #[test]
    fn test_ties_go_to_first_pipeline() {
        let g = square();
        // Both pipelines produce the perimeter tour of length 4.
        let selector = CandidateSelector::new(
            vec![
                Pipeline::new("first", nn_from(0)),
                Pipeline::new("second", nn_from(0)),
            ],
            1,
        );
        let outcome = selector.select(&g).expect("valid");
        assert_eq!(outcome.best_index(), 0);
        assert_eq!(outcome.best().pipeline, "first");
    }

    #[test]
    fn test_shorter_later_pipeline_wins() {
        let g = square();
        let crossing = Pipeline::new("random", ConstructionStrategy::Randomized);
        let fixed = Pipeline::new("fixed", nn_from(0))
            .with_optimizer(OptimizerStrategy::TwoOpt { max_passes: 10 });
        let outcome = CandidateSelector::new(vec![crossing, fixed], 3)
            .select(&g)
            .expect("valid");
        assert!((outcome.best_tour().length() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let g = scattered(35);
        let config = SolverConfig::default()
            .with_random_restarts(30)
            .with_optimized_restarts(4)
            .with_swap_restarts(5)
            .with_seed(77);
        let sequential = CandidateSelector::from_config(&config).select(&g).expect("valid");
        let parallel = CandidateSelector::from_config(&config.clone().with_parallel(true))
            .select(&g)
            .expect("valid");
        assert_eq!(sequential.best_index(), parallel.best_index());
        assert_eq!(sequential.candidates(), parallel.candidates());
    }

    #[test]
    fn test_empty_pipelines_rejected() {
        let g = square();
        let err = CandidateSelector::new(Vec::new(), 0).select(&g);
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_pipeline_rejected_before_running() {
        let g = square();
        let selector = CandidateSelector::new(
            vec![Pipeline::new("ok", nn_from(0)), Pipeline::new("bad", nn_from(9))],
            0,
        );
        assert!(matches!(selector.select(&g), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_single_point_every_pipeline() {
        let g = Geometry::from_coords(&[(3.0, 3.0)]).expect("valid");
        let outcome = CandidateSelector::from_config(&SolverConfig::default().with_swap_restarts(2))
            .select(&g)
            .expect("valid");
        for c in outcome.candidates() {
            assert_eq!(c.tour.path(), &[0]);
            assert_eq!(c.tour.length(), 0.0);
        }
    }

    #[test]
    fn test_two_points_out_and_back() {
        let g = Geometry::from_coords(&[(0.0, 0.0), (6.0, 8.0)]).expect("valid");
        let outcome = CandidateSelector::from_config(&SolverConfig::default())
            .select(&g)
            .expect("valid");
        assert!((outcome.best_tour().length() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_pipeline_seeds_differ() {
        assert_ne!(pipeline_seed(1, 0), pipeline_seed(1, 1));
        assert_ne!(pipeline_seed(1, 0), pipeline_seed(2, 0));
        assert_eq!(pipeline_seed(5, 3), pipeline_seed(5, 3));
    }

    #[test]
    fn test_into_best_tour() {
        let g = square();
        let outcome = CandidateSelector::new(vec![Pipeline::new("nn", nn_from(2))], 0)
            .select(&g)
            .expect("valid");
        let expected = outcome.best_tour().clone();
        assert_eq!(outcome.into_best_tour(), expected);
    }
}
