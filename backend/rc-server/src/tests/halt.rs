use crate::CommandHaltAction;

use rc_core::{HaltAction, HaltError, HaltMode};

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

#[tokio::test]
async fn given_no_commands_when_halting_then_succeeds_without_running_anything() {
    let action = CommandHaltAction::default();

    assert!(action.reload().await.is_ok());
    assert!(action.shutdown().await.is_ok());
}

#[cfg(unix)]
#[tokio::test]
async fn given_succeeding_command_when_reloading_then_ok() {
    let action = CommandHaltAction::new(argv(&["true"]), Vec::new());

    assert!(action.execute(HaltMode::Reload).await.is_ok());
}

#[cfg(unix)]
#[tokio::test]
async fn given_failing_command_when_shutting_down_then_non_zero_exit() {
    let action = CommandHaltAction::new(Vec::new(), argv(&["sh", "-c", "exit 3"]));

    let result = action.execute(HaltMode::Shutdown).await;

    match result {
        Err(HaltError::NonZeroExit { status, command, .. }) => {
            assert_eq!(status, 3);
            assert_eq!(command, "sh -c exit 3");
        }
        other => panic!("expected NonZeroExit, got {other:?}"),
    }
}

#[tokio::test]
async fn given_missing_program_when_reloading_then_spawn_error() {
    let action = CommandHaltAction::new(argv(&["/nonexistent/rc-reload-binary"]), Vec::new());

    let result = action.reload().await;

    assert!(matches!(result, Err(HaltError::Spawn { .. })));
}

#[test]
fn given_halt_config_when_built_then_commands_are_used() {
    let config = rc_config::HaltConfig {
        reload_command: argv(&["systemctl", "reload", "game"]),
        ..rc_config::HaltConfig::default()
    };

    let action = CommandHaltAction::from_config(&config);

    assert!(format!("{action:?}").contains("systemctl"));
}
