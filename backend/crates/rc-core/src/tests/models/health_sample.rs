use crate::HealthSample;
use crate::models::health_sample::{FALLBACK_MEMORY_PCT, FALLBACK_THROUGHPUT};

#[test]
fn test_fallback_sample_values() {
    let sample = HealthSample::fallback();

    assert_eq!(sample.throughput, FALLBACK_THROUGHPUT);
    assert_eq!(sample.memory_pct, FALLBACK_MEMORY_PCT);
}

#[test]
fn test_memory_reading_is_clamped() {
    assert_eq!(HealthSample::new(20.0, 140.0).memory_pct, 100.0);
    assert_eq!(HealthSample::new(20.0, -3.0).memory_pct, 0.0);
}
