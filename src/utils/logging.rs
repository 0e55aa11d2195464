//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to `app.log` in the data directory.
//! Logs are rotated on every startup, keeping the last 10 sessions.

use crate::error::{PortalError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (app.log.1 through app.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Name of the active log file
const LOG_FILE_NAME: &str = "app.log";

/// Initialize the logging system
///
/// `default_level` comes from the configuration; `RUST_LOG` overrides it when set.
/// Falls back to `info` if the configured filter does not parse.
pub fn init_logging(log_dir: &Path, default_level: &str) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;
    rotate_logs_on_startup(&log_dir.join(LOG_FILE_NAME))?;

    // Rotation is handled above, once per session, not by the appender
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| PortalError::ConfigError(Box::new(e)))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PortalError::ConfigError(Box::new(e)))?;

    tracing::info!("App Portal v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Shift `app.log` → `app.log.1` → … → `app.log.9`, dropping the oldest
///
/// Runs unconditionally at startup regardless of size, so each session's log is
/// kept separately. A fresh `app.log` is created by the appender afterwards.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| PortalError::ConfigError(StringError::new("Invalid log path")))?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| PortalError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();
    let numbered = |i: u8| log_dir.join(format!("{log_name}.{i}"));

    let oldest = numbered(MAX_LOG_FILES);
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current = numbered(i);
        if current.exists() {
            std::fs::rename(&current, numbered(i + 1))?;
        }
    }

    std::fs::rename(log_path, numbered(1))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;
    use std::fs;

    fn start_session(dir: &Path, content: &str) {
        let log_path = dir.join(LOG_FILE_NAME);
        fs::write(&log_path, content).unwrap();
        rotate_logs_on_startup(&log_path).unwrap();
    }

    #[test]
    fn test_rotate_moves_current_log() {
        let temp_dir = create_test_dir();
        start_session(temp_dir.path(), "Session 1");

        assert!(!temp_dir.path().join(LOG_FILE_NAME).exists());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("app.log.1")).unwrap(),
            "Session 1"
        );
    }

    #[test]
    fn test_rotate_keeps_most_recent_first() {
        let temp_dir = create_test_dir();
        for i in 1..=5 {
            start_session(temp_dir.path(), &format!("Session {i}"));
        }

        for i in 1..=5 {
            let content = fs::read_to_string(temp_dir.path().join(format!("app.log.{i}"))).unwrap();
            assert_eq!(content, format!("Session {}", 6 - i));
        }
    }

    #[test]
    fn test_rotate_respects_max_files() {
        let temp_dir = create_test_dir();
        for i in 1..=12 {
            start_session(temp_dir.path(), &format!("Session {i}"));
        }

        for i in 1..=MAX_LOG_FILES {
            assert!(temp_dir.path().join(format!("app.log.{i}")).exists());
        }
        assert!(!temp_dir.path().join("app.log.10").exists());

        // Sessions 1-3 were dropped; session 4 is the oldest kept
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("app.log.9")).unwrap(),
            "Session 4"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("app.log.1")).unwrap(),
            "Session 12"
        );
    }

    #[test]
    fn test_rotate_without_existing_log() {
        let temp_dir = create_test_dir();
        rotate_logs_on_startup(&temp_dir.path().join(LOG_FILE_NAME)).unwrap();
        assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_rotate_with_gaps_in_history() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("app.log.1"), "Previous").unwrap();
        fs::write(temp_dir.path().join("app.log.5"), "Very old").unwrap();
        start_session(temp_dir.path(), "Current");

        let read = |name: &str| fs::read_to_string(temp_dir.path().join(name)).unwrap();
        assert_eq!(read("app.log.1"), "Current");
        assert_eq!(read("app.log.2"), "Previous");
        assert_eq!(read("app.log.6"), "Very old");
    }
}
