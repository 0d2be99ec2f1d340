//! Collaborator interfaces the restart core calls into.
//!
//! Concrete implementations live with the host (the daemon binary, tests).

pub mod broadcaster;
pub mod halt_action;
pub mod sampler;
