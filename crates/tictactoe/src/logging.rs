//! Tracing setup.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Sends tracing output to the configured log file.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this
/// twice is harmless; the first subscriber stays installed.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.file())
        .with_context(|| format!("Failed to create log file {}", config.file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Like [`init_tracing`], but a log file that can't be created only costs
/// the log. Returns whether logging is active.
pub fn init_tracing_best_effort(config: &LogConfig) -> bool {
    match init_tracing(config) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("warning: logging disabled: {:#}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppConfig;

    fn unwritable_log() -> (tempfile::TempDir, AppConfig) {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join("missing").join("game.log");
        let toml = format!("[log]\nfile = {:?}\n", file.display().to_string());
        let config = AppConfig::from_toml(&toml).expect("parse");
        (dir, config)
    }

    #[test]
    fn test_uncreatable_log_file_is_error() {
        let (_dir, config) = unwritable_log();
        let err = init_tracing(config.log()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to create log file"));
    }

    #[test]
    fn test_best_effort_survives_uncreatable_log_file() {
        let (_dir, config) = unwritable_log();
        assert!(!init_tracing_best_effort(config.log()));
    }
}
