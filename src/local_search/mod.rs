//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`] — 2-opt segment reversal to a local optimum
//! - [`pairwise_swap_improve`] — Single bounded-depth pass of vertex swaps
//!
//! [`OptimizerStrategy`] selects one of them at runtime. Both only accept
//! strictly improving moves, so tour length never increases.

mod pairwise_swap;
mod two_opt;

pub use pairwise_swap::pairwise_swap_improve;
pub use two_opt::{two_opt_delta, two_opt_improve};

use serde::{Deserialize, Serialize};

use crate::distance::Geometry;
use crate::error::{Error, Result};
use crate::models::Tour;

/// A move must shorten the tour by more than this to be accepted.
pub(crate) const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Counters reported by a local search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LocalSearchStats {
    /// Full passes over the neighborhood.
    pub passes: usize,
    /// Moves evaluated.
    pub moves_evaluated: usize,
    /// Improving moves applied.
    pub moves_applied: usize,
}

impl LocalSearchStats {
    /// Adds another run's counters to this one.
    pub fn absorb(&mut self, other: LocalSearchStats) {
        self.passes += other.passes;
        self.moves_evaluated += other.moves_evaluated;
        self.moves_applied += other.moves_applied;
    }
}

/// A local search operator and its budget.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::models::Tour;
/// use u_tsp::local_search::OptimizerStrategy;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let mut tour = Tour::new(&g, vec![0, 2, 1, 3]);
/// OptimizerStrategy::TwoOpt { max_passes: 50 }.apply(&g, &mut tour);
/// assert!((tour.length() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptimizerStrategy {
    /// Keep the constructed tour as is.
    #[default]
    None,
    /// 2-opt until convergence or `max_passes` passes.
    TwoOpt { max_passes: usize },
    /// One bounded pass of pairwise swaps over the first `depth` positions.
    PairwiseSwap { depth: usize },
}

impl OptimizerStrategy {
    /// Short identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::TwoOpt { .. } => "two_opt",
            Self::PairwiseSwap { .. } => "pairwise_swap",
        }
    }

    /// Rejects zero budgets.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::TwoOpt { max_passes: 0 } => {
                Err(Error::invalid_config("2-opt pass ceiling must be at least 1"))
            }
            Self::PairwiseSwap { depth: 0 } => {
                Err(Error::invalid_config("swap depth must be at least 1"))
            }
            _ => Ok(()),
        }
    }

    /// Improves `tour` in place.
    pub fn apply(&self, geometry: &Geometry, tour: &mut Tour) -> LocalSearchStats {
        match *self {
            Self::None => LocalSearchStats::default(),
            Self::TwoOpt { max_passes } => two_opt_improve(geometry, tour, max_passes),
            Self::PairwiseSwap { depth } => pairwise_swap_improve(geometry, tour, depth),
        }
    }
}
