//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise the level follows the `-v` count.
//! The interactive dashboard owns the terminal, so its logs go to a file or
//! nowhere at all.

use std::{fs::File, io, path::Path, sync::Mutex};

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub(crate) fn init(verbosity: u8, target: LogTarget<'_>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(io::stderr), true),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        LogTarget::Discard => (BoxMakeWriter::new(io::sink), false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")?;
    Ok(())
}
