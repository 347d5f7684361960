//! Result output in path, length, summary, or JSON form.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::selection::SelectionOutcome;

/// What to print for the selected tour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Vertex ids of the winning tour, one per line.
    #[default]
    Path,
    /// Length of the winning tour.
    Length,
    /// One `"<pipeline> tour distance: <length>"` line per pipeline, then
    /// the selected length.
    Summary,
    /// The full selection outcome as JSON.
    Json,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Path => "path",
            Self::Length => "length",
            Self::Summary => "summary",
            Self::Json => "json",
        })
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "path" => Ok(Self::Path),
            "length" | "dist" => Ok(Self::Length),
            "summary" => Ok(Self::Summary),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output mode '{other}' (expected path, length, summary, or json)"
            )),
        }
    }
}

/// Writes `outcome` to `out` in the requested mode.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Geometry;
/// use u_tsp::config::SolverConfig;
/// use u_tsp::io::{write_outcome, OutputMode};
/// use u_tsp::selection::CandidateSelector;
///
/// let g = Geometry::from_coords(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// let outcome = CandidateSelector::from_config(&SolverConfig::default()).select(&g).unwrap();
///
/// let mut out = Vec::new();
/// write_outcome(&mut out, &outcome, OutputMode::Length).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "10\n");
/// ```
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &SelectionOutcome,
    mode: OutputMode,
) -> Result<()> {
    let best = outcome.best_tour();
    match mode {
        OutputMode::Path => {
            for id in best.path() {
                writeln!(out, "{id}")?;
            }
        }
        OutputMode::Length => {
            writeln!(out, "{}", best.length())?;
        }
        OutputMode::Summary => {
            for candidate in outcome.candidates() {
                writeln!(
                    out,
                    "{} tour distance: {}",
                    candidate.pipeline,
                    candidate.tour.length()
                )?;
            }
            writeln!(out, "Selected tour distance: {}", best.length())?;
        }
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, outcome)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
