//! Logger setup for the `u-tsp` binary.
//!
//! Library code only emits `log` records; installing a logger is left to
//! the caller.

use std::io::{self, Write};

use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

use crate::error::Result;

/// Installs a stderr logger printing `LEVEL [target] message` lines.
///
/// Fails if a global logger is already installed.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });

    builder.try_init().map_err(io::Error::other)?;
    Ok(())
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
