pub mod error;
pub mod format;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests;

pub use error::{CoreError, HaltError, Result, SamplerError};
pub use format::{format_duration, render_template};
pub use models::halt_mode::HaltMode;
pub use models::health_sample::HealthSample;
pub use models::recurring_restart::RecurringRestart;
pub use models::restart_history_entry::RestartHistoryEntry;
pub use models::restart_reason::RestartReason;
pub use models::restart_request::RestartRequest;
pub use models::schedule_time_zone::ScheduleTimeZone;
pub use models::severity::Severity;
pub use ports::broadcaster::Broadcaster;
pub use ports::halt_action::HaltAction;
pub use ports::sampler::Sampler;

/// Template token replaced with the human-readable time remaining.
pub const TIME_TOKEN: &str = "{time}";
/// Template token replaced with the restart reason's display label.
pub const REASON_TOKEN: &str = "{reason}";
