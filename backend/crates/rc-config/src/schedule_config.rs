use crate::{ConfigError, ConfigErrorResult};

use std::str::FromStr;

use log::warn;
use rc_core::{RecurringRestart, ScheduleTimeZone};
use serde::Deserialize;

pub const DEFAULT_RESTART_TIMES: [&str; 3] = ["04:00", "12:00", "20:00"];
pub const DEFAULT_TIMEZONE: &str = "local";
pub const DEFAULT_COUNTDOWN_SECS: u64 = 300;
pub const MAX_COUNTDOWN_SECS: u64 = 3600;

/// Recurring time-of-day restarts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// "HH:MM" entries; malformed entries are skipped, not fatal
    pub restart_times: Vec<String>,
    /// "local", "utc" or a fixed offset like "+02:00"
    pub timezone: String,
    /// Warning lead before each recurring restart; the countdown starts
    /// this many seconds early so the restart lands on the minute
    pub countdown_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            restart_times: DEFAULT_RESTART_TIMES.iter().map(|t| t.to_string()).collect(),
            timezone: String::from(DEFAULT_TIMEZONE),
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.countdown_secs > MAX_COUNTDOWN_SECS {
            return Err(ConfigError::schedule(format!(
                "schedule.countdown_secs must be 0-{MAX_COUNTDOWN_SECS}, got {}",
                self.countdown_secs
            )));
        }

        self.time_zone().map(|_| ())
    }

    pub fn time_zone(&self) -> ConfigErrorResult<ScheduleTimeZone> {
        ScheduleTimeZone::from_str(&self.timezone).map_err(|e| {
            ConfigError::schedule(format!(
                "schedule.timezone must be local, utc or +HH:MM, got '{}' ({e})",
                self.timezone
            ))
        })
    }

    /// Parse every configured time, warning about and dropping bad ones.
    ///
    /// Duplicates collapse to a single definition.
    pub fn recurring_restarts(&self) -> Vec<RecurringRestart> {
        let mut restarts: Vec<RecurringRestart> = self
            .restart_times
            .iter()
            .filter_map(|raw| match RecurringRestart::from_str(raw) {
                Ok(restart) => Some(restart),
                Err(e) => {
                    warn!("Invalid restart time format, skipping: {e}");
                    None
                }
            })
            .collect();

        restarts.sort();
        restarts.dedup();
        restarts
    }
}
