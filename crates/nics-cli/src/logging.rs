use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// `-q` silences everything; otherwise each `-v` lowers the threshold by one level,
/// starting from WARN.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

// Compact, colored stderr output plus an optional plain-text copy with event targets,
// both behind one level filter.
fn build_subscriber(
    level: LevelFilter,
    log_file: Option<File>,
) -> impl Subscriber + Send + Sync + 'static {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();
    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(level)
        .with(stderr_layer)
        .with(file_layer)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let file = log_file
        .map(File::create)
        .transpose()
        .map_err(CliError::Io)?;

    build_subscriber(level_for(verbosity, quiet), file)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}
