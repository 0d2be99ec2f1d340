use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, Utc};

/// Timezone recurring restart times are interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleTimeZone {
    /// Host local time
    #[default]
    Local,
    Utc,
    /// Fixed offset such as `+02:00`
    Fixed(FixedOffset),
}

impl ScheduleTimeZone {
    /// Current wall-clock time in this zone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            Self::Local => Local::now().fixed_offset(),
            Self::Utc => Utc::now().fixed_offset(),
            Self::Fixed(offset) => Utc::now().with_timezone(offset),
        }
    }
}

impl FromStr for ScheduleTimeZone {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" | "" => return Ok(Self::Local),
            "utc" | "z" => return Ok(Self::Utc),
            _ => {}
        }

        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'+') => (1, &trimmed[1..]),
            Some(b'-') => (-1, &trimmed[1..]),
            _ => return Err(CoreError::invalid_time_zone(s)),
        };

        let (hours, minutes) = rest
            .split_once(':')
            .ok_or_else(|| CoreError::invalid_time_zone(s))?;
        let hours: i32 = hours.parse().map_err(|_| CoreError::invalid_time_zone(s))?;
        let minutes: i32 = minutes
            .parse()
            .map_err(|_| CoreError::invalid_time_zone(s))?;
        if !(0..=14).contains(&hours) || !(0..=59).contains(&minutes) {
            return Err(CoreError::invalid_time_zone(s));
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Self::Fixed)
            .ok_or_else(|| CoreError::invalid_time_zone(s))
    }
}

impl std::fmt::Display for ScheduleTimeZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Utc => write!(f, "utc"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}
