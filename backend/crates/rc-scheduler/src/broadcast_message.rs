use rc_core::Severity;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An announcement published on the broadcast channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BroadcastMessage {
    /// None means everyone
    pub recipient: Option<String>,
    pub text: String,
    pub severity: Severity,
    pub sent_at: DateTime<Utc>,
}

impl BroadcastMessage {
    pub fn to_all<T: Into<String>>(text: T) -> Self {
        Self {
            recipient: None,
            text: text.into(),
            severity: Severity::Info,
            sent_at: Utc::now(),
        }
    }

    pub fn to_one<R: Into<String>, T: Into<String>>(
        recipient: R,
        text: T,
        severity: Severity,
    ) -> Self {
        Self {
            recipient: Some(recipient.into()),
            text: text.into(),
            severity,
            sent_at: Utc::now(),
        }
    }

    pub fn is_broadcast(&self) -> bool {
        self.recipient.is_none()
    }
}
