//! Restart orchestration: the scheduler that owns every restart timeline,
//! the health monitor that feeds it emergency requests, and the timer
//! primitives both are built on.

mod active_restart;
pub mod broadcast_config;
pub mod broadcast_message;
pub mod channel_broadcaster;
pub mod delayed_task;
pub mod error;
pub mod health_check;
pub mod health_monitor;
pub mod health_thresholds;
pub mod metrics;
mod recurring_timer;
pub mod repeating_timer;
pub mod restart_history;
pub mod restart_phase;
pub mod restart_scheduler;
pub mod restart_status;
pub mod restart_ticket;
pub mod scheduler_settings;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod warning_plan;

pub use broadcast_config::BroadcastConfig;
pub use broadcast_message::BroadcastMessage;
pub use channel_broadcaster::ChannelBroadcaster;
pub use delayed_task::DelayedTask;
pub use error::{SchedulerError, SchedulerResult};
pub use health_check::HealthCheck;
pub use health_monitor::{HealthMonitor, MONITOR_INITIATOR};
pub use health_thresholds::HealthThresholds;
pub use metrics::SchedulerMetrics;
pub use recurring_timer::DAY;
pub use repeating_timer::RepeatingTimer;
pub use restart_history::{DEFAULT_HISTORY_CAPACITY, RestartHistory};
pub use restart_phase::RestartPhase;
pub use restart_scheduler::RestartScheduler;
pub use restart_status::RestartStatus;
pub use restart_ticket::RestartTicket;
pub use scheduler_settings::SchedulerSettings;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use warning_plan::warning_offsets;

#[cfg(test)]
mod tests;
