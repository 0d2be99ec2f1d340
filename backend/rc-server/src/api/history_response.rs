use rc_core::RestartHistoryEntry;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Oldest first
    pub entries: Vec<RestartHistoryEntry>,
    pub total_restarts_managed: u64,
}
