use crate::{HealthCheck, HealthThresholds, RepeatingTimer, RestartScheduler, SchedulerMetrics};

use rc_core::models::health_sample::{FALLBACK_MEMORY_PCT, FALLBACK_THROUGHPUT};
use rc_core::{HealthSample, RestartRequest, Sampler, SamplerError};

use std::ops::ControlFlow;
use std::sync::{Arc, Weak};
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::sync::Mutex;

pub const MONITOR_INITIATOR: &str = "HealthMonitor";

/// Samples throughput and memory on a fixed interval and asks the
/// scheduler for an emergency restart when a reading crosses the
/// emergency tier.
pub struct HealthMonitor {
    inner: Arc<MonitorInner>,
}

struct MonitorInner {
    sampler: Arc<dyn Sampler>,
    scheduler: RestartScheduler,
    state: Mutex<MonitorState>,
    metrics: SchedulerMetrics,
}

struct MonitorState {
    thresholds: HealthThresholds,
    last_sample: Option<HealthSample>,
    healthy: bool,
    total_checks: u64,
    emergency_triggers: u64,
    timer: Option<RepeatingTimer>,
}

impl HealthMonitor {
    pub fn new(
        sampler: Arc<dyn Sampler>,
        scheduler: RestartScheduler,
        thresholds: HealthThresholds,
    ) -> Self {
        Self {
            inner: Arc::new(MonitorInner {
                sampler,
                scheduler,
                state: Mutex::new(MonitorState {
                    thresholds,
                    last_sample: None,
                    healthy: true,
                    total_checks: 0,
                    emergency_triggers: 0,
                    timer: None,
                }),
                metrics: SchedulerMetrics::new(),
            }),
        }
    }

    pub async fn thresholds(&self) -> HealthThresholds {
        self.inner.state.lock().await.thresholds
    }

    /// Judge subsequent checks against `thresholds`. The check interval of a
    /// running timer is unchanged; call `start_monitoring` again for that.
    pub async fn set_thresholds(&self, thresholds: HealthThresholds) {
        self.inner.state.lock().await.thresholds = thresholds;
        info!(
            "Health thresholds updated (healthy: throughput>={}, memory<={}%)",
            thresholds.healthy_throughput_floor, thresholds.healthy_memory_ceiling
        );
    }

    /// Check every `interval`, first check one interval from now. Replaces
    /// a timer already running.
    pub async fn start_monitoring(&self, interval: Duration) {
        let weak: Weak<MonitorInner> = Arc::downgrade(&self.inner);
        let timer = RepeatingTimer::spawn(interval, interval, move |_| {
            let weak = Weak::clone(&weak);
            async move {
                match weak.upgrade() {
                    Some(inner) => {
                        inner.perform_check().await;
                        ControlFlow::Continue(())
                    }
                    None => ControlFlow::Break(()),
                }
            }
        });

        let mut state = self.inner.state.lock().await;
        if let Some(previous) = state.timer.replace(timer) {
            previous.cancel();
        }
        info!("Health monitoring started (every {}s)", interval.as_secs());
    }

    pub async fn stop_monitoring(&self) {
        let mut state = self.inner.state.lock().await;
        if let Some(timer) = state.timer.take() {
            timer.cancel();
            info!("Health monitoring stopped");
        }
    }

    /// Run one check now.
    pub async fn perform_check(&self) -> HealthCheck {
        self.inner.perform_check().await
    }

    pub async fn last_sample(&self) -> Option<HealthSample> {
        self.inner.state.lock().await.last_sample
    }

    pub async fn is_healthy(&self) -> bool {
        self.inner.state.lock().await.healthy
    }

    pub async fn total_checks(&self) -> u64 {
        self.inner.state.lock().await.total_checks
    }

    pub async fn emergency_triggers(&self) -> u64 {
        self.inner.state.lock().await.emergency_triggers
    }

    pub async fn is_monitoring(&self) -> bool {
        let state = self.inner.state.lock().await;
        state.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }
}

impl Clone for HealthMonitor {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl MonitorInner {
    /// Each signal falls back on its own so one missing source does not
    /// mask the other.
    fn sample(&self) -> HealthSample {
        let throughput = reading_or(
            self.sampler.read_throughput(),
            "Throughput",
            FALLBACK_THROUGHPUT,
        );
        let memory_pct = reading_or(
            self.sampler.read_memory_pct(),
            "Memory",
            FALLBACK_MEMORY_PCT,
        );
        HealthSample::new(throughput, memory_pct)
    }

    async fn perform_check(&self) -> HealthCheck {
        let sample = self.sample();
        let thresholds = self.state.lock().await.thresholds;
        let healthy = thresholds.is_healthy(&sample);
        let emergency = thresholds.emergency_reason(&sample);

        self.metrics.health_check(healthy);
        self.metrics.health_sample(sample.throughput, sample.memory_pct);

        {
            let mut state = self.state.lock().await;
            state.total_checks += 1;
            state.last_sample = Some(sample);

            if state.healthy && !healthy {
                warn!(
                    "Server health degraded: throughput {:.2}, memory {:.1}%",
                    sample.throughput, sample.memory_pct
                );
            } else if !state.healthy && healthy {
                info!(
                    "Server health recovered: throughput {:.2}, memory {:.1}%",
                    sample.throughput, sample.memory_pct
                );
            }
            state.healthy = healthy;

            if emergency.is_some() {
                state.emergency_triggers += 1;
            }
        }

        let Some(reason) = emergency else {
            return HealthCheck {
                sample,
                healthy,
                emergency: None,
                restart_requested: false,
            };
        };

        self.metrics.emergency_triggered(reason);

        if self.scheduler.is_emergency_active().await {
            debug!("{reason} detected while an emergency restart is already counting down");
            return HealthCheck {
                sample,
                healthy,
                emergency: Some(reason),
                restart_requested: false,
            };
        }

        error!(
            "{reason} detected (throughput {:.2}, memory {:.1}%), requesting restart in {}s",
            sample.throughput,
            sample.memory_pct,
            thresholds.emergency_delay.as_secs()
        );

        let request =
            RestartRequest::emergency(thresholds.emergency_delay, reason, MONITOR_INITIATOR);
        let restart_requested = match self.scheduler.request_restart(request).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Emergency restart request refused: {e}");
                false
            }
        };

        HealthCheck {
            sample,
            healthy,
            emergency: Some(reason),
            restart_requested,
        }
    }
}

fn reading_or(reading: Result<f64, SamplerError>, signal: &str, fallback: f64) -> f64 {
    reading.unwrap_or_else(|e| {
        debug!("{signal} reading unavailable, assuming {fallback}: {e}");
        fallback
    })
}
