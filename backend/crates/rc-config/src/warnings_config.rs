use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_WARNINGS_ENABLED: bool = true;
pub const DEFAULT_WARNING_INTERVALS: [u64; 9] = [300, 180, 60, 30, 10, 5, 3, 2, 1];
pub const DEFAULT_MIN_DELAY_SECS: u64 = 10;

pub const MAX_WARNING_INTERVAL_SECS: u64 = 86_400;

/// Countdown warning broadcasts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WarningsConfig {
    pub enabled: bool,
    /// Seconds before execution at which a warning is announced
    pub intervals: Vec<u64>,
    /// Restarts with a delay at or below this get no warnings
    pub min_delay_secs: u64,
}

impl Default for WarningsConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_WARNINGS_ENABLED,
            intervals: DEFAULT_WARNING_INTERVALS.to_vec(),
            min_delay_secs: DEFAULT_MIN_DELAY_SECS,
        }
    }
}

impl WarningsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(bad) = self
            .intervals
            .iter()
            .find(|&&secs| secs == 0 || secs > MAX_WARNING_INTERVAL_SECS)
        {
            return Err(ConfigError::config(format!(
                "warnings.intervals entries must be 1-{}, got {}",
                MAX_WARNING_INTERVAL_SECS, bad
            )));
        }

        Ok(())
    }
}
