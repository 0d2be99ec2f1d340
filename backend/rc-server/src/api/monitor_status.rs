use rc_core::HealthSample;
use rc_scheduler::HealthMonitor;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MonitorStatus {
    pub monitoring: bool,
    pub healthy: bool,
    pub last_sample: Option<HealthSample>,
    pub total_checks: u64,
    pub emergency_triggers: u64,
}

impl MonitorStatus {
    pub async fn collect(monitor: &HealthMonitor) -> Self {
        Self {
            monitoring: monitor.is_monitoring().await,
            healthy: monitor.is_healthy().await,
            last_sample: monitor.last_sample().await,
            total_checks: monitor.total_checks().await,
            emergency_triggers: monitor.emergency_triggers().await,
        }
    }
}
