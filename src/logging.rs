//! Logger setup.
//!
//! The interactive binary owns the terminal, so log lines cannot go to
//! stderr there; they are appended to a file instead, or dropped.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Once;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    File(PathBuf),
}

/// `env_filter` uses the `env_logger` filter syntax (e.g. "info",
/// "apple_catcher_core=debug"). When unset, `RUST_LOG` is consulted.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub target: LogTarget,
}

impl LoggingConfig {
    /// File when a path is given, otherwise off.
    pub fn for_terminal(log_path: Option<PathBuf>) -> Self {
        Self {
            env_filter: None,
            target: log_path.map_or(LogTarget::Off, LogTarget::File),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            target: LogTarget::Stderr,
        }
    }
}

static INIT: Once = Once::new();

/// Install the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let target = match &config.target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => env_logger::Target::Stderr,
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            env_logger::Target::Pipe(Box::new(file))
        }
    };

    INIT.call_once(move || {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        if matches!(config.target, LogTarget::File(_)) {
            builder.write_style(env_logger::WriteStyle::Never);
        }
        builder.target(target);

        // Another logger may already be installed (e.g. by a test harness).
        let _ = builder.try_init();

        log::debug!("logging initialized");
    });
    Ok(())
}
