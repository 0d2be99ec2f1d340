pub mod announcement_log;
pub mod api;
pub mod error;
pub mod halt;
pub mod health;
pub mod logger;
pub mod reload;
pub mod routes;
pub mod sampler;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    cancel_response::CancelResponse,
    error::{ApiError, Result as ApiResult},
    history_response::HistoryResponse,
    monitor_status::MonitorStatus,
    reload_response::ReloadResponse,
    restart_request_body::RestartRequestBody,
    status_response::StatusResponse,
};
pub use error::{Result as ServerResult, ServerError};
pub use halt::CommandHaltAction;
pub use reload::reload_from_disk;
pub use routes::build_router;
pub use sampler::SystemSampler;
pub use state::AppState;
