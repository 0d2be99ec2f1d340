use rc_core::RestartReason;

use serde::Serialize;

/// Receipt for an accepted restart request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestartTicket {
    pub generation: u64,
    pub reason: RestartReason,
    pub initiator: String,
    pub delay_secs: u64,
    /// Seconds-before-execution at which warnings will be broadcast
    pub warnings: Vec<u64>,
    /// Reason of the restart this one replaced
    pub superseded: Option<RestartReason>,
}
