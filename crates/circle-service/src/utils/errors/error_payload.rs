use serde::Serialize;
use utoipa::ToSchema;

/// The API error response structure. Every error crosses the transport
/// boundary in this shape so clients can branch on `success` alone.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorPayload {
    /// The error message
    pub message: String,
    /// Always `false`
    pub success: bool,
}
