// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// JSON envelope returned by every route.
///
/// `message` carries the short human notice ("Spot 3 booked successfully!")
/// that a browser front-end shows once after an action.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok_body(data: T, message: Option<String>) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message,
            error: None,
        }
    }

    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::ok_body(data, None))
    }

    pub fn success_with_notice(data: T, notice: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(Self::ok_body(data, Some(notice.into())))
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(Self::ok_body(data, None))
    }

    pub fn created_with_notice(data: T, notice: impl Into<String>) -> HttpResponse {
        HttpResponse::Created().json(Self::ok_body(data, Some(notice.into())))
    }
}

impl ApiResponse<()> {
    /// Success without payload, only a notice.
    pub fn notice(notice: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            data: None,
            message: Some(notice.to_string()),
            error: None,
        })
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            message: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn validation_error(message: &str) -> HttpResponse {
        Self::bad_request("VALIDATION_ERROR", message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
