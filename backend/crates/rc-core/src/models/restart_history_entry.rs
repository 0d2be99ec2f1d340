use crate::RestartReason;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable record of an executed restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestartHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub reason: RestartReason,
    pub initiator: String,
    pub detail: String,
}

impl RestartHistoryEntry {
    pub fn new<I: Into<String>, D: Into<String>>(
        reason: RestartReason,
        initiator: I,
        detail: D,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            reason,
            initiator: initiator.into(),
            detail: detail.into(),
        }
    }
}
