use rc_core::RestartReason;

use metrics::{counter, gauge};

/// Metrics collector for restart orchestration
#[derive(Debug, Clone)]
pub struct SchedulerMetrics {
    prefix: &'static str,
}

impl SchedulerMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "rc_scheduler",
        }
    }

    pub fn restart_requested(&self, reason: RestartReason) {
        counter!(format!("{}.restarts.requested", self.prefix)).increment(1);
        counter!(format!(
            "{}.restarts.requested.{}",
            self.prefix,
            reason.as_str()
        ))
        .increment(1);
    }

    pub fn restart_rejected(&self, reason: RestartReason) {
        counter!(format!("{}.restarts.rejected", self.prefix)).increment(1);
        counter!(format!(
            "{}.restarts.rejected.{}",
            self.prefix,
            reason.as_str()
        ))
        .increment(1);
    }

    pub fn restart_superseded(&self) {
        counter!(format!("{}.restarts.superseded", self.prefix)).increment(1);
    }

    pub fn restart_cancelled(&self) {
        counter!(format!("{}.restarts.cancelled", self.prefix)).increment(1);
        gauge!(format!("{}.countdown.remaining_seconds", self.prefix)).set(0.0);
    }

    pub fn restart_executed(&self, reason: RestartReason) {
        counter!(format!("{}.restarts.executed", self.prefix)).increment(1);
        counter!(format!(
            "{}.restarts.executed.{}",
            self.prefix,
            reason.as_str()
        ))
        .increment(1);
        gauge!(format!("{}.countdown.remaining_seconds", self.prefix)).set(0.0);
    }

    pub fn halt_failed(&self) {
        counter!(format!("{}.halt.failures", self.prefix)).increment(1);
    }

    pub fn warning_sent(&self) {
        counter!(format!("{}.warnings.sent", self.prefix)).increment(1);
    }

    pub fn remaining_seconds(&self, seconds: u64) {
        gauge!(format!("{}.countdown.remaining_seconds", self.prefix)).set(seconds as f64);
    }

    pub fn health_check(&self, healthy: bool) {
        counter!(format!("{}.health.checks", self.prefix)).increment(1);
        gauge!(format!("{}.health.healthy", self.prefix)).set(if healthy { 1.0 } else { 0.0 });
    }

    pub fn health_sample(&self, throughput: f64, memory_pct: f64) {
        gauge!(format!("{}.health.throughput", self.prefix)).set(throughput);
        gauge!(format!("{}.health.memory_pct", self.prefix)).set(memory_pct);
    }

    pub fn emergency_triggered(&self, reason: RestartReason) {
        counter!(format!("{}.health.emergencies", self.prefix)).increment(1);
        counter!(format!(
            "{}.health.emergencies.{}",
            self.prefix,
            reason.as_str()
        ))
        .increment(1);
    }
}

impl Default for SchedulerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
