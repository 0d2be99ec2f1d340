pub mod cancel_response;
pub mod error;
pub mod history_response;
pub mod monitor_status;
pub mod reload_response;
pub mod restart;
pub mod restart_request_body;
pub mod status_response;
