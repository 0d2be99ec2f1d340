//! Re-read configuration from disk and apply it to a running daemon.
//!
//! Only the schedule and health thresholds are swapped live. Logging,
//! the admin bind address and the monitoring interval take effect on the
//! next start.

use crate::api::reload_response::ReloadResponse;

use rc_config::{Config, ConfigErrorResult};
use rc_scheduler::{HealthMonitor, HealthThresholds, RestartScheduler, SchedulerSettings};

use log::info;

/// Load, validate, then apply. Nothing is applied when any step fails.
pub async fn reload_from_disk(
    scheduler: &RestartScheduler,
    monitor: &HealthMonitor,
) -> ConfigErrorResult<ReloadResponse> {
    let config = Config::load()?;
    config.validate()?;
    let settings = SchedulerSettings::from_config(&config)?;
    let recurring_restarts = settings.recurring.len();

    scheduler.reload(settings).await;
    monitor
        .set_thresholds(HealthThresholds::from_config(&config))
        .await;

    let next_scheduled_restart = scheduler.next_scheduled_restart().await;
    info!(
        "Configuration reloaded: {} recurring restart(s), next at {}",
        recurring_restarts,
        next_scheduled_restart.map_or_else(|| "never".to_string(), |next| next.to_rfc3339())
    );

    Ok(ReloadResponse {
        reloaded: true,
        recurring_restarts,
        next_scheduled_restart,
    })
}
