use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MAX_GRACE_PERIOD_SECS: u64 = 60;
pub const DEFAULT_GRACE_PERIOD_SECS: u64 = 2;

/// How the countdown ends.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HaltConfig {
    /// Pause between the final announcement and the halt action
    pub grace_period_secs: u64,
    /// argv run for a graceful reload; empty only logs
    pub reload_command: Vec<String>,
    /// argv run for an emergency shutdown; empty only logs
    pub shutdown_command: Vec<String>,
}

impl Default for HaltConfig {
    fn default() -> Self {
        Self {
            grace_period_secs: DEFAULT_GRACE_PERIOD_SECS,
            reload_command: Vec::new(),
            shutdown_command: Vec::new(),
        }
    }
}

impl HaltConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.grace_period_secs > MAX_GRACE_PERIOD_SECS {
            return Err(ConfigError::config(format!(
                "halt.grace_period_secs must be 0-{}, got {}",
                MAX_GRACE_PERIOD_SECS, self.grace_period_secs
            )));
        }

        Ok(())
    }
}
