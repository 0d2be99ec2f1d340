use crate::SamplerError;

/// Source of the two health signals watched by the monitor.
pub trait Sampler: Send + Sync {
    fn read_throughput(&self) -> Result<f64, SamplerError>;

    /// Memory utilisation as a percentage, 0-100.
    fn read_memory_pct(&self) -> Result<f64, SamplerError>;
}
