use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_MONITORING_ENABLED: bool = true;

pub const MIN_CHECK_INTERVAL_SECS: u64 = 1;
pub const MAX_CHECK_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 30;

pub const MIN_THROUGHPUT_THRESHOLD: f64 = 1.0;
pub const MAX_THROUGHPUT_THRESHOLD: f64 = 20.0;
pub const DEFAULT_THROUGHPUT_THRESHOLD: f64 = 16.0;

pub const MIN_MEMORY_THRESHOLD: f64 = 1.0;
pub const MAX_MEMORY_THRESHOLD: f64 = 100.0;
pub const DEFAULT_MEMORY_THRESHOLD: f64 = 85.0;

/// Periodic health sampling and the "healthy" tier.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub check_interval_secs: u64,
    /// Healthy when throughput is at or above this
    pub throughput_threshold: f64,
    /// Healthy when memory utilisation is at or below this percentage
    pub memory_threshold: f64,
    /// File the daemon's sampler reads throughput from
    pub throughput_file: Option<String>,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_MONITORING_ENABLED,
            check_interval_secs: DEFAULT_CHECK_INTERVAL_SECS,
            throughput_threshold: DEFAULT_THROUGHPUT_THRESHOLD,
            memory_threshold: DEFAULT_MEMORY_THRESHOLD,
            throughput_file: None,
        }
    }
}

impl MonitoringConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.check_interval_secs < MIN_CHECK_INTERVAL_SECS
            || self.check_interval_secs > MAX_CHECK_INTERVAL_SECS
        {
            return Err(ConfigError::monitoring(format!(
                "monitoring.check_interval_secs must be {}-{}, got {}",
                MIN_CHECK_INTERVAL_SECS, MAX_CHECK_INTERVAL_SECS, self.check_interval_secs
            )));
        }

        if !(MIN_THROUGHPUT_THRESHOLD..=MAX_THROUGHPUT_THRESHOLD)
            .contains(&self.throughput_threshold)
        {
            return Err(ConfigError::monitoring(format!(
                "monitoring.throughput_threshold must be {}-{}, got {}",
                MIN_THROUGHPUT_THRESHOLD, MAX_THROUGHPUT_THRESHOLD, self.throughput_threshold
            )));
        }

        if !(MIN_MEMORY_THRESHOLD..=MAX_MEMORY_THRESHOLD).contains(&self.memory_threshold) {
            return Err(ConfigError::monitoring(format!(
                "monitoring.memory_threshold must be {}-{}, got {}",
                MIN_MEMORY_THRESHOLD, MAX_MEMORY_THRESHOLD, self.memory_threshold
            )));
        }

        Ok(())
    }
}
