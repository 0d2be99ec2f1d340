use rc_core::Severity;
use rc_scheduler::{BroadcastMessage, ShutdownGuard};

use log::{error, info, warn};
use tokio::sync::broadcast::{Receiver, error::RecvError};
use tokio::task::JoinHandle;

/// Mirror every announcement into the log until shutdown.
pub fn spawn(mut receiver: Receiver<BroadcastMessage>, mut guard: ShutdownGuard) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = guard.wait() => break,
                received = receiver.recv() => match received {
                    Ok(message) => log_message(&message),
                    Err(RecvError::Lagged(missed)) => {
                        warn!("Announcement log lagged, missed {missed} message(s)");
                    }
                    Err(RecvError::Closed) => break,
                },
            }
        }
    })
}

fn log_message(message: &BroadcastMessage) {
    let target = message.recipient.as_deref().unwrap_or("all");
    match message.severity {
        Severity::Info => info!("[announce -> {target}] {}", message.text),
        Severity::Warning => warn!("[announce -> {target}] {}", message.text),
        Severity::Error | Severity::Emergency => {
            error!("[announce -> {target}] {}", message.text)
        }
    }
}
