use chrono::{DateTime, FixedOffset};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub reloaded: bool,
    pub recurring_restarts: usize,
    pub next_scheduled_restart: Option<DateTime<FixedOffset>>,
}
