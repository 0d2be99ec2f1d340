mod history;
mod shutdown;

use crate::{RestartScheduler, SchedulerSettings};

use rc_core::{
    Broadcaster, HaltAction, HaltError, Sampler, SamplerError, ScheduleTimeZone, Severity,
};

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

// =========================================================================
// Recording fakes
// =========================================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Recorded {
    pub recipient: Option<String>,
    pub text: String,
    pub severity: Option<Severity>,
}

#[derive(Default)]
pub(crate) struct RecordingBroadcaster {
    messages: Mutex<Vec<Recorded>>,
}

impl RecordingBroadcaster {
    /// Texts sent to everyone, in order.
    pub fn broadcasts(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.recipient.is_none())
            .map(|m| m.text.clone())
            .collect()
    }

    /// Messages sent to a single recipient, in order.
    pub fn direct(&self) -> Vec<Recorded> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.recipient.is_some())
            .cloned()
            .collect()
    }

    pub fn broadcasts_containing(&self, needle: &str) -> usize {
        self.broadcasts()
            .iter()
            .filter(|text| text.contains(needle))
            .count()
    }
}

#[async_trait]
impl Broadcaster for RecordingBroadcaster {
    async fn send_to_all(&self, text: &str) {
        self.messages.lock().unwrap().push(Recorded {
            recipient: None,
            text: text.to_string(),
            severity: None,
        });
    }

    async fn send_to_one(&self, recipient: &str, text: &str, severity: Severity) {
        self.messages.lock().unwrap().push(Recorded {
            recipient: Some(recipient.to_string()),
            text: text.to_string(),
            severity: Some(severity),
        });
    }
}

#[derive(Default)]
pub(crate) struct RecordingHaltAction {
    reloads: AtomicUsize,
    shutdowns: AtomicUsize,
    fail: bool,
}

impl RecordingHaltAction {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }

    pub fn shutdowns(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }

    fn outcome(&self) -> Result<(), HaltError> {
        if self.fail {
            Err(HaltError::other("halt refused in test"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl HaltAction for RecordingHaltAction {
    async fn reload(&self) -> Result<(), HaltError> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        self.outcome()
    }

    async fn shutdown(&self) -> Result<(), HaltError> {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
        self.outcome()
    }
}

/// Sampler whose readings tests set directly. None means unavailable.
pub(crate) struct FakeSampler {
    throughput: Mutex<Option<f64>>,
    memory_pct: Mutex<Option<f64>>,
}

impl FakeSampler {
    pub fn new(throughput: f64, memory_pct: f64) -> Self {
        Self {
            throughput: Mutex::new(Some(throughput)),
            memory_pct: Mutex::new(Some(memory_pct)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            throughput: Mutex::new(None),
            memory_pct: Mutex::new(None),
        }
    }

    /// `None` makes that signal fail to read.
    pub fn partial(throughput: Option<f64>, memory_pct: Option<f64>) -> Self {
        Self {
            throughput: Mutex::new(throughput),
            memory_pct: Mutex::new(memory_pct),
        }
    }

    pub fn set(&self, throughput: f64, memory_pct: f64) {
        *self.throughput.lock().unwrap() = Some(throughput);
        *self.memory_pct.lock().unwrap() = Some(memory_pct);
    }
}

impl Sampler for FakeSampler {
    fn read_throughput(&self) -> Result<f64, SamplerError> {
        self.throughput
            .lock()
            .unwrap()
            .ok_or_else(|| SamplerError::unavailable("no throughput source"))
    }

    fn read_memory_pct(&self) -> Result<f64, SamplerError> {
        self.memory_pct
            .lock()
            .unwrap()
            .ok_or_else(|| SamplerError::unavailable("no memory source"))
    }
}

// =========================================================================
// Helpers
// =========================================================================

/// Default settings without recurring restarts or a grace period.
pub(crate) fn test_settings() -> SchedulerSettings {
    SchedulerSettings {
        grace_period: Duration::ZERO,
        recurring: Vec::new(),
        time_zone: ScheduleTimeZone::Utc,
        ..SchedulerSettings::default()
    }
}

pub(crate) struct Harness {
    pub scheduler: RestartScheduler,
    pub broadcaster: Arc<RecordingBroadcaster>,
    pub halt: Arc<RecordingHaltAction>,
}

pub(crate) fn harness(settings: SchedulerSettings) -> Harness {
    harness_with_halt(settings, RecordingHaltAction::default())
}

pub(crate) fn harness_with_halt(
    settings: SchedulerSettings,
    halt: RecordingHaltAction,
) -> Harness {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let halt = Arc::new(halt);
    let scheduler = RestartScheduler::new(
        settings,
        Arc::clone(&broadcaster) as Arc<dyn Broadcaster>,
        Arc::clone(&halt) as Arc<dyn HaltAction>,
    );

    Harness {
        scheduler,
        broadcaster,
        halt,
    }
}

/// Let paused time run forward, firing every timer due on the way.
pub(crate) async fn advance_ms(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
}

pub(crate) fn secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
