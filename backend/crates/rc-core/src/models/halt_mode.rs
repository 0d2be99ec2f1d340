use serde::{Deserialize, Serialize};

/// Which external halt entry point ends a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaltMode {
    /// Graceful reload of the server process
    Reload,
    /// Hard stop, used for emergencies
    Shutdown,
}

impl HaltMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reload => "reload",
            Self::Shutdown => "shutdown",
        }
    }
}

impl std::fmt::Display for HaltMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
