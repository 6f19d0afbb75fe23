// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
    /// One-shot notice for the user interface
    #[schema(example = "Spot 3 booked successfully!")]
    pub message: Option<String>,
}

/// Success response carrying only a notice
#[derive(Serialize, ToSchema)]
pub struct NoticeResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "You have been logged out.")]
    pub message: String,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "NO_AVAILABLE_SPOT")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "No spots available in this lot.")]
    pub message: String,
}
