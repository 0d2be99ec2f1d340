use rc_core::{HaltAction, HaltError};

use async_trait::async_trait;
use log::{info, warn};
use tokio::process::Command;

/// Runs the configured reload/shutdown command lines.
///
/// An empty command only logs, which suits running the daemon beside a
/// server that is restarted by other means.
#[derive(Debug, Clone, Default)]
pub struct CommandHaltAction {
    reload_command: Vec<String>,
    shutdown_command: Vec<String>,
}

impl CommandHaltAction {
    pub fn new(reload_command: Vec<String>, shutdown_command: Vec<String>) -> Self {
        Self {
            reload_command,
            shutdown_command,
        }
    }

    pub fn from_config(config: &rc_config::HaltConfig) -> Self {
        Self::new(
            config.reload_command.clone(),
            config.shutdown_command.clone(),
        )
    }

    async fn run(&self, label: &str, argv: &[String]) -> Result<(), HaltError> {
        let Some((program, args)) = argv.split_first() else {
            warn!("No {label} command configured, nothing to run");
            return Ok(());
        };

        let command_line = argv.join(" ");
        info!("Running {label} command: {command_line}");

        let status = Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|e| HaltError::spawn(command_line.clone(), e))?;

        if status.success() {
            info!("{label} command finished");
            Ok(())
        } else {
            Err(HaltError::non_zero_exit(
                command_line,
                status.code().unwrap_or(-1),
            ))
        }
    }
}

#[async_trait]
impl HaltAction for CommandHaltAction {
    async fn reload(&self) -> Result<(), HaltError> {
        self.run("reload", &self.reload_command).await
    }

    async fn shutdown(&self) -> Result<(), HaltError> {
        self.run("shutdown", &self.shutdown_command).await
    }
}
