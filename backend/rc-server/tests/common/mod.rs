#![allow(dead_code)]

//! Test infrastructure for rc-server API tests

use rc_core::{HaltAction, HaltError, HealthSample, Sampler, SamplerError, ScheduleTimeZone};
use rc_scheduler::{
    BroadcastConfig, ChannelBroadcaster, HealthMonitor, HealthThresholds, RestartScheduler,
    SchedulerSettings, ShutdownCoordinator,
};
use rc_server::{AppState, build_router};

use std::env;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use tempfile::TempDir;

/// Counts halt invocations instead of touching the host
#[derive(Debug, Default)]
pub struct CountingHaltAction {
    pub reloads: AtomicUsize,
    pub shutdowns: AtomicUsize,
}

#[async_trait]
impl HaltAction for CountingHaltAction {
    async fn reload(&self) -> Result<(), HaltError> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), HaltError> {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Always reports the same reading
pub struct FixedSampler {
    pub throughput: f64,
    pub memory_pct: f64,
}

impl Sampler for FixedSampler {
    fn read_throughput(&self) -> Result<f64, SamplerError> {
        Ok(self.throughput)
    }

    fn read_memory_pct(&self) -> Result<f64, SamplerError> {
        Ok(self.memory_pct)
    }
}

pub struct TestServerWithState {
    pub server: TestServer,
    pub state: AppState,
    pub broadcaster: ChannelBroadcaster,
    pub halt: Arc<CountingHaltAction>,
}

pub fn test_settings() -> SchedulerSettings {
    SchedulerSettings {
        grace_period: Duration::ZERO,
        recurring: Vec::new(),
        time_zone: ScheduleTimeZone::Utc,
        ..SchedulerSettings::default()
    }
}

/// Healthy sampler readings
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_sample(HealthSample::new(25.0, 40.0))
}

pub fn create_test_server_with_sample(sample: HealthSample) -> TestServerWithState {
    let broadcaster = ChannelBroadcaster::new(BroadcastConfig::default());
    let halt = Arc::new(CountingHaltAction::default());
    let scheduler = RestartScheduler::new(
        test_settings(),
        Arc::new(broadcaster.clone()),
        Arc::clone(&halt) as Arc<dyn HaltAction>,
    );
    let monitor = HealthMonitor::new(
        Arc::new(FixedSampler {
            throughput: sample.throughput,
            memory_pct: sample.memory_pct,
        }),
        scheduler.clone(),
        HealthThresholds::default(),
    );
    let state = AppState::new(scheduler, monitor, ShutdownCoordinator::new());

    let server = TestServer::new(build_router(state.clone())).expect("Failed to create test server");

    TestServerWithState {
        server,
        state,
        broadcaster,
        halt,
    }
}

/// Restores an environment variable on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory with `contents` as its config.toml, pointed to
/// by RC_CONFIG_DIR. Callers must be `#[serial]`.
pub fn config_dir_with(contents: &str) -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), contents).unwrap();
    let guard = EnvGuard::set("RC_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
