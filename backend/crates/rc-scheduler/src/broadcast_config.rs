/// Configuration for the in-process announcement channel
#[derive(Debug, Clone)]
pub struct BroadcastConfig {
    /// Messages buffered for slow subscribers before they start lagging
    pub channel_capacity: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}
