//! Dashboard configuration
//!
//! Optional JSON file under the user's config directory. Every field has a
//! default, so a missing or partial file is fine.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::upcoming::{parse_time, DEFAULT_DATE_LABEL, DEFAULT_UPCOMING_LIMIT};
use crate::trends::daily::format_date_label;
use crate::trends::monthly::DEFAULT_MONTH_LABEL;
use crate::CommandError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Classes shown in the upcoming widget
    pub upcoming_limit: usize,
    /// Planner slot length in minutes
    pub slot_interval_minutes: u32,
    /// First planner slot, HH:MM
    pub day_start: String,
    /// End of the planner day (exclusive), HH:MM
    pub day_end: String,
    /// chrono format for month dropdown labels
    pub month_label_format: String,
    /// chrono format for upcoming class dates
    pub date_label_format: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            slot_interval_minutes: 60,
            day_start: "06:00".to_string(),
            day_end: "22:00".to_string(),
            month_label_format: DEFAULT_MONTH_LABEL.to_string(),
            date_label_format: DEFAULT_DATE_LABEL.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, CommandError> {
        let contents = std::fs::read_to_string(path)?;
        let config: DashboardConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default path, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        let path = default_config_path();
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), CommandError> {
        if self.upcoming_limit == 0 {
            return Err(CommandError::Config("upcoming_limit must be positive".to_string()));
        }
        if self.slot_interval_minutes == 0 {
            return Err(CommandError::Config(
                "slot_interval_minutes must be positive".to_string(),
            ));
        }
        for (name, value) in [("day_start", &self.day_start), ("day_end", &self.day_end)] {
            if parse_time(value).is_none() {
                return Err(CommandError::Config(format!("{} is not HH:MM: {}", name, value)));
            }
        }

        // Labels are rendered from bare dates
        let sample = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();
        for (name, value) in [
            ("month_label_format", &self.month_label_format),
            ("date_label_format", &self.date_label_format),
        ] {
            if format_date_label(sample, value).is_none() {
                return Err(CommandError::Config(format!(
                    "{} is not a usable date format: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Get the default config path
pub fn default_config_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("gymdash").join("config.json")
}
