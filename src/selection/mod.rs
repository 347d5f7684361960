//! Candidate generation and selection.
//!
//! - [`Pipeline`] — Construction + optimization with restarts
//! - [`CandidateSelector`] — Runs pipelines and keeps the shortest tour

mod pipeline;
mod selector;

pub use pipeline::{Candidate, Pipeline};
pub use selector::{pipeline_seed, CandidateSelector, SelectionOutcome};
