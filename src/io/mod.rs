//! Text input and output.
//!
//! - [`parse_map`] / [`read_map`] — Point count followed by coordinate pairs
//! - [`write_outcome`] — Path, length, summary, or JSON output

mod reader;
mod writer;

pub use reader::{parse_map, read_map};
pub use writer::{write_outcome, OutputMode};
