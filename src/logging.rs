//! Log setup.
//!
//! The game owns the terminal, so logs only go to a file. Without
//! `MEMORY_MATCH_LOG_PATH` no subscriber is installed and `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

pub const DEFAULT_FILTER: &str = "memory_match=info,memory_match_engine=info";

/// Filter from the configured directives, or the default when absent or invalid.
pub fn filter_for(config: &AppConfig) -> EnvFilter {
    config
        .log_filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the file logger. Returns false when logging is off.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter_for(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .context("installing log subscriber")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_off_without_path() {
        assert!(!init(&AppConfig::default()).unwrap());
    }

    #[test]
    fn test_filter_falls_back_on_bad_directives() {
        let config = AppConfig {
            log_filter: Some("memory_match=[".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(filter_for(&config).to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    }
}
