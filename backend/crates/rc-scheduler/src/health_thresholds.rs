use rc_config::Config;
use rc_core::{HealthSample, RestartReason};

use std::time::Duration;

/// The two threshold tiers the monitor judges samples against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthThresholds {
    /// Healthy requires throughput at or above this
    pub healthy_throughput_floor: f64,
    /// Healthy requires memory at or below this
    pub healthy_memory_ceiling: f64,
    pub emergency_enabled: bool,
    /// Emergency when throughput drops below this
    pub emergency_throughput_floor: f64,
    /// Emergency when memory rises above this
    pub emergency_memory_ceiling: f64,
    pub emergency_delay: Duration,
    pub check_interval: Duration,
}

impl HealthThresholds {
    pub fn from_config(config: &Config) -> Self {
        Self {
            healthy_throughput_floor: config.monitoring.throughput_threshold,
            healthy_memory_ceiling: config.monitoring.memory_threshold,
            emergency_enabled: config.emergency.enabled,
            emergency_throughput_floor: config.emergency.throughput_threshold,
            emergency_memory_ceiling: config.emergency.memory_threshold,
            emergency_delay: Duration::from_secs(config.emergency.delay_secs),
            check_interval: Duration::from_secs(config.monitoring.check_interval_secs),
        }
    }

    pub fn is_healthy(&self, sample: &HealthSample) -> bool {
        sample.throughput >= self.healthy_throughput_floor
            && sample.memory_pct <= self.healthy_memory_ceiling
    }

    /// The emergency tag a sample warrants, if any. Throughput is checked
    /// first.
    pub fn emergency_reason(&self, sample: &HealthSample) -> Option<RestartReason> {
        if !self.emergency_enabled {
            return None;
        }

        if sample.throughput < self.emergency_throughput_floor {
            Some(RestartReason::EmergencyThroughput)
        } else if sample.memory_pct > self.emergency_memory_ceiling {
            Some(RestartReason::EmergencyMemory)
        } else {
            None
        }
    }
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
