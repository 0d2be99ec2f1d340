use rc_scheduler::{HealthMonitor, RestartScheduler, ShutdownCoordinator};

use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;

/// Shared handles the admin API works against.
#[derive(Clone)]
pub struct AppState {
    pub scheduler: RestartScheduler,
    pub monitor: HealthMonitor,
    pub shutdown: ShutdownCoordinator,
    /// None when no recorder was installed (tests, embedded use)
    pub metrics: Option<PrometheusHandle>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        scheduler: RestartScheduler,
        monitor: HealthMonitor,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        Self {
            scheduler,
            monitor,
            shutdown,
            metrics: None,
            started_at: Utc::now(),
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
