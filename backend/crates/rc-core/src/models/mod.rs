pub mod halt_mode;
pub mod health_sample;
pub mod recurring_restart;
pub mod restart_history_entry;
pub mod restart_reason;
pub mod restart_request;
pub mod schedule_time_zone;
pub mod severity;
