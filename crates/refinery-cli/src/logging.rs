//! Logging setup using `tracing-subscriber`.
//!
//! The library emits `tracing` events; the CLI decides where they go. Logs
//! are written to stderr so command output on stdout stays clean.
//!
//! # Log Levels
//!
//! - `error`: failures that abort a command
//! - `warn`: skipped actions (type mismatches, degenerate statistics)
//! - `info`: files loaded and exported
//! - `debug`: each applied action, skipped columns
//! - `trace`: everything else

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for this workspace's crates.
    pub level: Level,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Map the `-v`/`--quiet` flags to a level.
    pub fn from_flags(verbosity: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else {
            match verbosity {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };
        Self {
            level,
            ..Self::default()
        }
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time()
        .try_init()
}

/// Build an `EnvFilter` for the given level; `RUST_LOG` takes precedence.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        // Other crates stay at warn.
        EnvFilter::new(format!("warn,refinery={level},refinery_cli={level}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_to_level() {
        assert_eq!(LogConfig::from_flags(0, false).level, Level::WARN);
        assert_eq!(LogConfig::from_flags(1, false).level, Level::INFO);
        assert_eq!(LogConfig::from_flags(2, false).level, Level::DEBUG);
        assert_eq!(LogConfig::from_flags(5, false).level, Level::TRACE);
        assert_eq!(LogConfig::from_flags(0, true).level, Level::ERROR);
    }

    #[test]
    fn test_with_ansi() {
        assert!(!LogConfig::default().with_ansi(false).with_ansi);
    }
}
