use serde::Deserialize;

pub const DEFAULT_RESTART_WARNING: &str = "[WARNING] Server restart in {time}! ({reason})";
pub const DEFAULT_RESTART_NOW: &str = "[RESTART] Server restarting NOW! ({reason})";
pub const DEFAULT_EMERGENCY_RESTART: &str = "[EMERGENCY] Emergency restart initiated: {reason}";
pub const DEFAULT_RESTART_CANCELLED: &str = "[RESTART] Scheduled restart cancelled.";

/// Broadcast templates. `{time}` and `{reason}` are substituted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub restart_warning: String,
    pub restart_now: String,
    pub emergency_restart: String,
    pub restart_cancelled: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            restart_warning: String::from(DEFAULT_RESTART_WARNING),
            restart_now: String::from(DEFAULT_RESTART_NOW),
            emergency_restart: String::from(DEFAULT_EMERGENCY_RESTART),
            restart_cancelled: String::from(DEFAULT_RESTART_CANCELLED),
        }
    }
}
