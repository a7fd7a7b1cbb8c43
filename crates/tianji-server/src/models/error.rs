use serde::Serialize;
use utoipa::ToSchema;

/// Failure envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    pub error: String,
}
