//! GymDash Core - dashboard and planner backend
//!
//! This library provides the computation layer behind the GymDash frontend.
//! It handles:
//! - Month bucketing and period filtering of REST collections
//! - Aggregation and month-over-month change for summary cards
//! - Dense daily series for dashboard charts
//! - Weekly class schedules: upcoming occurrences, day status, regeneration
//! - Personal planner items and list selection state
//! - CSV/JSON export of chart data
//!
//! Everything here is synchronous and side-effect free apart from config
//! loading and export. The UI fetches collections from the backend and hands
//! them to [`commands`].

pub mod commands;
pub mod config;
pub mod export;
pub mod metrics;
pub mod models;
pub mod planner;
pub mod schedule;
pub mod trends;

pub use config::DashboardConfig;

/// Error type for dashboard commands
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid month bucket: {0}")]
    InvalidBucket(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// Errors cross the UI boundary as plain strings
impl serde::Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Install the fmt subscriber for the host application.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(level: tracing::Level) {
    if tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .is_ok()
    {
        tracing::info!("GymDash core logging initialized at {}", level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_serializes_as_string() {
        let err = CommandError::InvalidBucket("2024-1".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Invalid month bucket: 2024-1\"");
    }

    #[test]
    fn test_command_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CommandError = io.into();
        assert!(matches!(err, CommandError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(tracing::Level::DEBUG);
        init_tracing(tracing::Level::INFO);
    }
}
