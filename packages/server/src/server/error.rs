//! HTTP error mapping.
//!
//! Every handler returns `ApiResult<T>`. Core errors and extractor
//! rejections both end up as `{ "error_code": ..., "message": ... }`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::common::CoreError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error_code: &'static str,
    message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", m.clone()),
            ApiError::Core(err) => match err {
                CoreError::Unauthorized => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", err.to_string())
                }
                CoreError::Forbidden(m) => (StatusCode::FORBIDDEN, "FORBIDDEN", m.clone()),
                CoreError::Validation { .. } => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
                }
                CoreError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
                CoreError::Conflict(m) => (StatusCode::CONFLICT, "CONFLICT", m.clone()),
                CoreError::MembershipGrantFailed {
                    invitation_id,
                    event_id,
                    user_id,
                    ..
                } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MEMBERSHIP_GRANT_FAILED",
                    format!(
                        "invitation {} was accepted but user {} could not be added to event {}",
                        invitation_id, user_id, event_id
                    ),
                ),
                CoreError::Internal(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "internal error".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Core(err) = &self {
            if err.is_internal() {
                error!(error = ?err, "Request failed with internal error");
            }
        }

        let (status, error_code, message) = self.parts();
        (status, Json(ErrorBody { error_code, message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// `axum::Json` whose rejection is an `ApiError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` whose rejection is an `ApiError`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
