//! Engine configuration loaded from environment variables.
//!
//! Only the lookback windows are tunable; the scoring weights are fixed
//! design constants and live next to the code that uses them.

use std::env;

/// Engine configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Lookback window for fitness metrics, in days.
    pub metrics_window_days: u32,
    /// Lookback window for the activity-type overlap slice, in days.
    pub overlap_window_days: u32,
}

const DEFAULT_METRICS_WINDOW_DAYS: u32 = 90;
const DEFAULT_OVERLAP_WINDOW_DAYS: u32 = 30;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            metrics_window_days: DEFAULT_METRICS_WINDOW_DAYS,
            overlap_window_days: DEFAULT_OVERLAP_WINDOW_DAYS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults; set-but-invalid values are
    /// rejected so a typo never silently shrinks a window.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            metrics_window_days: read_window_days(
                "METRICS_WINDOW_DAYS",
                DEFAULT_METRICS_WINDOW_DAYS,
            )?,
            overlap_window_days: read_window_days(
                "OVERLAP_WINDOW_DAYS",
                DEFAULT_OVERLAP_WINDOW_DAYS,
            )?,
        })
    }
}

/// Read a day-count variable, requiring at least one full week.
fn read_window_days(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => {
            let days: u32 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(name, raw.clone()))?;
            if days < 7 {
                return Err(ConfigError::Invalid(name, raw));
            }
            Ok(days)
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?} (expected a day count >= 7)")]
    Invalid(&'static str, String),
}
