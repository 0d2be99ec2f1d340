use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use chrono::{DateTime, Days, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

/// A daily restart at a wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecurringRestart {
    pub hour: u32,
    pub minute: u32,
}

impl RecurringRestart {
    #[track_caller]
    pub fn new(hour: u32, minute: u32) -> CoreErrorResult<Self> {
        let label = format!("{hour:02}:{minute:02}");
        if hour > 23 {
            return Err(CoreError::invalid_restart_time(label, "hour must be 0-23"));
        }
        if minute > 59 {
            return Err(CoreError::invalid_restart_time(label, "minute must be 0-59"));
        }
        Ok(Self { hour, minute })
    }

    pub fn time(&self) -> NaiveTime {
        // Range is checked on construction
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Next instant strictly after `now` at this time of day.
    ///
    /// Today if the time is still ahead, otherwise tomorrow. A local time
    /// skipped by a DST jump moves on to the following day.
    pub fn next_occurrence<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let timezone = now.timezone();
        let today = now.date_naive();

        (0..=2u64).find_map(|offset| {
            let date = today.checked_add_days(Days::new(offset))?;
            let candidate = timezone
                .from_local_datetime(&date.and_time(self.time()))
                .earliest()?;
            (candidate > *now).then_some(candidate)
        })
    }
}

impl FromStr for RecurringRestart {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() != 2 {
            return Err(CoreError::invalid_restart_time(s, "expected HH:MM"));
        }

        let hour = parts[0]
            .parse::<u32>()
            .map_err(|_| CoreError::invalid_restart_time(s, "hour is not a number"))?;
        let minute = parts[1]
            .parse::<u32>()
            .map_err(|_| CoreError::invalid_restart_time(s, "minute is not a number"))?;

        // Report the input as written rather than the normalised label
        Self::new(hour, minute).map_err(|e| match e {
            CoreError::InvalidRestartTime { message, .. } => {
                CoreError::invalid_restart_time(s, message)
            }
            other => other,
        })
    }
}

impl std::fmt::Display for RecurringRestart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
