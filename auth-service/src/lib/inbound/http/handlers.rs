use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::account::errors::AccountError;

pub mod current_user;
pub mod health;
pub mod login;
pub mod register;

/// HTTP-facing error.
///
/// Every 401 carries a `WWW-Authenticate: Bearer` challenge. Storage faults
/// map to 503 so callers can tell "retry later" from "your request is
/// wrong"; nothing here is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    UnprocessableEntity(String),
    InternalServerError(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        let mut response = (status, Json(json!({ "error": message }))).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            // Fixed message: the stored email is not echoed back.
            AccountError::EmailAlreadyExists(_) => {
                ApiError::BadRequest("Email already exists".to_string())
            }
            AccountError::InvalidCredentials | AccountError::Unauthenticated => {
                ApiError::Unauthorized(err.to_string())
            }
            AccountError::InvalidEmail(_) => ApiError::UnprocessableEntity(err.to_string()),
            AccountError::DatabaseError(_) => ApiError::ServiceUnavailable(err.to_string()),
            AccountError::Password(_) | AccountError::Token(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}
