use serde::Serialize;

/// Where the scheduler is in a restart's lifecycle.
///
/// A request moves straight from `Idle` to `CountingDown`; arming happens
/// in the same step, so there is no observable armed-but-idle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartPhase {
    #[default]
    Idle,
    CountingDown,
    Executing,
}

impl RestartPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CountingDown => "counting_down",
            Self::Executing => "executing",
        }
    }
}

impl std::fmt::Display for RestartPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
