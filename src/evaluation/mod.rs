//! Tour scoring.
//!
//! - [`tour_length`] — Closed-tour Euclidean length (the objective)
//! - [`is_complete_tour`] — Hamiltonian-cycle check
//! - [`longest_edge`] — Longest edge of a closed tour

mod metrics;

pub use metrics::{is_complete_tour, longest_edge, tour_length};
