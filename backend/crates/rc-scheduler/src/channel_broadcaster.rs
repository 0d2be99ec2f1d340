use crate::{BroadcastConfig, BroadcastMessage};

use rc_core::{Broadcaster, Severity};

use async_trait::async_trait;
use tokio::sync::broadcast;

/// `Broadcaster` that publishes onto a tokio broadcast channel for
/// in-process consumers.
#[derive(Clone)]
pub struct ChannelBroadcaster {
    sender: broadcast::Sender<BroadcastMessage>,
    config: BroadcastConfig,
}

impl ChannelBroadcaster {
    pub fn new(config: BroadcastConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity);
        Self { sender, config }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BroadcastMessage> {
        let receiver = self.sender.subscribe();
        log::debug!(
            "Announcement subscriber added ({} total)",
            self.sender.receiver_count()
        );
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn config(&self) -> &BroadcastConfig {
        &self.config
    }

    /// Returns how many subscribers received the message.
    pub fn publish(&self, message: BroadcastMessage) -> usize {
        match self.sender.send(message) {
            Ok(receiver_count) => {
                log::debug!("Published announcement to {receiver_count} subscriber(s)");
                receiver_count
            }
            Err(_) => {
                // Nobody listening is fine
                log::debug!("Announcement had no active subscribers");
                0
            }
        }
    }
}

impl Default for ChannelBroadcaster {
    fn default() -> Self {
        Self::new(BroadcastConfig::default())
    }
}

#[async_trait]
impl Broadcaster for ChannelBroadcaster {
    async fn send_to_all(&self, text: &str) {
        self.publish(BroadcastMessage::to_all(text));
    }

    async fn send_to_one(&self, recipient: &str, text: &str, severity: Severity) {
        self.publish(BroadcastMessage::to_one(recipient, text, severity));
    }
}
