use crate::{HaltError, HaltMode};

use async_trait::async_trait;

/// The terminal action that actually restarts the server process.
///
/// Invoked at most once per executed restart.
#[async_trait]
pub trait HaltAction: Send + Sync {
    /// Graceful reload.
    async fn reload(&self) -> Result<(), HaltError>;

    /// Hard stop.
    async fn shutdown(&self) -> Result<(), HaltError>;

    async fn execute(&self, mode: HaltMode) -> Result<(), HaltError> {
        match mode {
            HaltMode::Reload => self.reload().await,
            HaltMode::Shutdown => self.shutdown().await,
        }
    }
}
