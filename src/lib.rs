//! # u-tsp
//!
//! Approximate Euclidean TSP. Several independent pipelines (construction
//! heuristic, optional local search, restarts) each produce a closed tour,
//! and the shortest one wins.
//!
//! ## Modules
//!
//! - [`models`] — Point, Tour, Cluster, DistanceMetric
//! - [`distance`] — Point geometry and nearest-neighbor queries
//! - [`evaluation`] — Tour length and completeness checks
//! - [`constructive`] — Nearest-neighbor, randomized, and clustered construction
//! - [`local_search`] — 2-opt and pairwise swap improvement
//! - [`selection`] — Pipelines and best-of-candidates selection
//! - [`config`] — Solver budgets and the default pipeline set
//! - [`io`] — Map parsing and result output
//! - [`logging`] — Logger setup for the binary
//!
//! ## Example
//!
//! ```
//! use u_tsp::config::SolverConfig;
//! use u_tsp::io::parse_map;
//! use u_tsp::selection::CandidateSelector;
//!
//! let geometry = parse_map("4\n0 0\n0 1\n1 0\n1 1\n").unwrap();
//! let config = SolverConfig::default().with_random_restarts(20);
//! let outcome = CandidateSelector::from_config(&config).select(&geometry).unwrap();
//! assert!((outcome.best_tour().length() - 4.0).abs() < 1e-10);
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod io;
pub mod local_search;
pub mod logging;
pub mod models;
pub mod selection;

pub use error::{Error, Result};
