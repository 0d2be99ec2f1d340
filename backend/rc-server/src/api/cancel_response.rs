use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    /// False when nothing was counting down
    pub cancelled: bool,
}
