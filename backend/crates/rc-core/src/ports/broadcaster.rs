use crate::Severity;

use async_trait::async_trait;

/// Delivers restart announcements to the people using the server.
#[async_trait]
pub trait Broadcaster: Send + Sync {
    /// Announce `text` to every connected recipient.
    async fn send_to_all(&self, text: &str);

    /// Deliver `text` to a single recipient with a severity hint.
    async fn send_to_one(&self, recipient: &str, text: &str, severity: Severity);
}
