use rc_core::{Sampler, SamplerError};

use std::path::PathBuf;
use std::sync::Mutex;

use sysinfo::System;

/// Reads memory utilisation from the host and throughput from a file the
/// monitored server keeps up to date.
pub struct SystemSampler {
    system: Mutex<System>,
    throughput_file: Option<PathBuf>,
}

impl SystemSampler {
    pub fn new(throughput_file: Option<PathBuf>) -> Self {
        Self {
            system: Mutex::new(System::new()),
            throughput_file,
        }
    }

    pub fn from_config(config: &rc_config::MonitoringConfig) -> Self {
        Self::new(config.throughput_file.as_ref().map(PathBuf::from))
    }
}

impl Sampler for SystemSampler {
    fn read_throughput(&self) -> Result<f64, SamplerError> {
        let Some(ref path) = self.throughput_file else {
            return Err(SamplerError::unavailable("no throughput file configured"));
        };

        let raw = std::fs::read_to_string(path).map_err(|e| {
            SamplerError::unavailable(format!("cannot read {}: {e}", path.display()))
        })?;

        parse_reading(&raw)
    }

    fn read_memory_pct(&self) -> Result<f64, SamplerError> {
        let mut system = self
            .system
            .lock()
            .map_err(|_| SamplerError::unavailable("memory sampler lock poisoned"))?;
        system.refresh_memory();

        let total = system.total_memory();
        if total == 0 {
            return Err(SamplerError::unavailable("total memory reported as zero"));
        }

        Ok(system.used_memory() as f64 / total as f64 * 100.0)
    }
}

/// A single finite, non-negative number, surrounding whitespace allowed.
pub fn parse_reading(raw: &str) -> Result<f64, SamplerError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(SamplerError::invalid_reading(trimmed)),
    }
}
