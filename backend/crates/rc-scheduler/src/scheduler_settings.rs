use crate::restart_history::DEFAULT_HISTORY_CAPACITY;

use rc_config::{Config, ConfigErrorResult, MessagesConfig};
use rc_core::{RecurringRestart, ScheduleTimeZone};

use std::time::Duration;

/// Everything the scheduler reads from configuration.
#[derive(Debug, Clone)]
pub struct SchedulerSettings {
    pub warnings_enabled: bool,
    /// Seconds before execution, in any order
    pub warning_intervals: Vec<u64>,
    /// Warnings are armed only for delays strictly above this
    pub min_warning_delay_secs: u64,
    /// Pause between the final announcement and the halt action
    pub grace_period: Duration,
    pub messages: MessagesConfig,
    pub recurring: Vec<RecurringRestart>,
    pub time_zone: ScheduleTimeZone,
    /// How far ahead of each recurring restart its countdown starts
    pub recurring_countdown: Duration,
    pub history_capacity: usize,
}

impl SchedulerSettings {
    pub fn from_config(config: &Config) -> ConfigErrorResult<Self> {
        Ok(Self {
            warnings_enabled: config.warnings.enabled,
            warning_intervals: config.warnings.intervals.clone(),
            min_warning_delay_secs: config.warnings.min_delay_secs,
            grace_period: Duration::from_secs(config.halt.grace_period_secs),
            messages: config.messages.clone(),
            recurring: config.recurring_restarts(),
            time_zone: config.schedule.time_zone()?,
            recurring_countdown: Duration::from_secs(config.schedule.countdown_secs),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        })
    }
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            warnings_enabled: config.warnings.enabled,
            warning_intervals: config.warnings.intervals,
            min_warning_delay_secs: config.warnings.min_delay_secs,
            grace_period: Duration::from_secs(config.halt.grace_period_secs),
            messages: config.messages,
            recurring: Vec::new(),
            time_zone: ScheduleTimeZone::default(),
            recurring_countdown: Duration::from_secs(config.schedule.countdown_secs),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}
