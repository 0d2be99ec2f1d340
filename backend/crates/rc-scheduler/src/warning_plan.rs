/// Offsets (seconds before execution) that get a warning broadcast for a
/// restart `delay_secs` away.
///
/// Only offsets strictly below the delay qualify, and nothing is armed
/// unless the delay exceeds `min_delay_secs`. The result is descending and
/// free of duplicates whatever order the intervals were configured in.
pub fn warning_offsets(
    delay_secs: u64,
    intervals: &[u64],
    min_delay_secs: u64,
    enabled: bool,
) -> Vec<u64> {
    if !enabled || delay_secs <= min_delay_secs {
        return Vec::new();
    }

    let mut offsets: Vec<u64> = intervals
        .iter()
        .copied()
        .filter(|offset| *offset > 0 && *offset < delay_secs)
        .collect();

    offsets.sort_unstable_by(|a, b| b.cmp(a));
    offsets.dedup();
    offsets
}
