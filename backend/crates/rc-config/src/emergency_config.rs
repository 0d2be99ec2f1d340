use crate::monitoring_config::{
    MAX_MEMORY_THRESHOLD, MAX_THROUGHPUT_THRESHOLD, MIN_MEMORY_THRESHOLD,
    MIN_THROUGHPUT_THRESHOLD,
};
use crate::{ConfigError, ConfigErrorResult, MonitoringConfig};

use serde::Deserialize;

pub const DEFAULT_EMERGENCY_ENABLED: bool = true;

pub const MAX_EMERGENCY_DELAY_SECS: u64 = 3600;
pub const DEFAULT_EMERGENCY_DELAY_SECS: u64 = 30;

pub const DEFAULT_EMERGENCY_THROUGHPUT_THRESHOLD: f64 = 12.0;
pub const DEFAULT_EMERGENCY_MEMORY_THRESHOLD: f64 = 95.0;

/// The stricter tier that triggers an emergency restart.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmergencyConfig {
    pub enabled: bool,
    /// Countdown length for emergency restarts
    pub delay_secs: u64,
    /// Emergency when throughput drops below this
    pub throughput_threshold: f64,
    /// Emergency when memory utilisation exceeds this percentage
    pub memory_threshold: f64,
}

impl Default for EmergencyConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_EMERGENCY_ENABLED,
            delay_secs: DEFAULT_EMERGENCY_DELAY_SECS,
            throughput_threshold: DEFAULT_EMERGENCY_THROUGHPUT_THRESHOLD,
            memory_threshold: DEFAULT_EMERGENCY_MEMORY_THRESHOLD,
        }
    }
}

impl EmergencyConfig {
    /// Emergency thresholds must be at least as strict as the healthy tier.
    pub fn validate(&self, monitoring: &MonitoringConfig) -> ConfigErrorResult<()> {
        if self.delay_secs > MAX_EMERGENCY_DELAY_SECS {
            return Err(ConfigError::monitoring(format!(
                "emergency.delay_secs must be 0-{}, got {}",
                MAX_EMERGENCY_DELAY_SECS, self.delay_secs
            )));
        }

        if !(MIN_THROUGHPUT_THRESHOLD..=MAX_THROUGHPUT_THRESHOLD)
            .contains(&self.throughput_threshold)
        {
            return Err(ConfigError::monitoring(format!(
                "emergency.throughput_threshold must be {}-{}, got {}",
                MIN_THROUGHPUT_THRESHOLD, MAX_THROUGHPUT_THRESHOLD, self.throughput_threshold
            )));
        }

        if !(MIN_MEMORY_THRESHOLD..=MAX_MEMORY_THRESHOLD).contains(&self.memory_threshold) {
            return Err(ConfigError::monitoring(format!(
                "emergency.memory_threshold must be {}-{}, got {}",
                MIN_MEMORY_THRESHOLD, MAX_MEMORY_THRESHOLD, self.memory_threshold
            )));
        }

        if self.throughput_threshold > monitoring.throughput_threshold {
            return Err(ConfigError::monitoring(format!(
                "emergency.throughput_threshold ({}) must not exceed monitoring.throughput_threshold ({})",
                self.throughput_threshold, monitoring.throughput_threshold
            )));
        }

        if self.memory_threshold < monitoring.memory_threshold {
            return Err(ConfigError::monitoring(format!(
                "emergency.memory_threshold ({}) must not be below monitoring.memory_threshold ({})",
                self.memory_threshold, monitoring.memory_threshold
            )));
        }

        Ok(())
    }
}
