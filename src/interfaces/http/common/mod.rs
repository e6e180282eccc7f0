//! Shared HTTP response types and extractors

pub mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// `{"success": ..., "message": ...}` body used for acknowledgments and
/// for every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Error half of every handler's `Result`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Translate a domain error. Client errors keep their message;
    /// infrastructure errors are logged and replaced by `server_message`.
    pub fn from_domain(err: DomainError, server_message: &str) -> Self {
        let status = match &err {
            DomainError::Validation(_) | DomainError::Conflict(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DomainError::Storage(_) | DomainError::Crypto(_) => {
                error!("{}: {}", server_message, err);
                return Self::new(StatusCode::INTERNAL_SERVER_ERROR, server_message);
            }
        };
        Self::new(status, err.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::from_domain(err, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::error(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_message() {
        let err = ApiError::from_domain(DomainError::Conflict("taken".into()), "ignored");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "taken");

        let err = ApiError::from_domain(DomainError::Unauthorized("no".into()), "ignored");
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(DomainError::NotFound {
            entity: "User",
            field: "id",
            value: "3".into(),
        });
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_detail_is_hidden() {
        let err = ApiError::from_domain(
            DomainError::Storage("FOREIGN KEY constraint failed".into()),
            "Failed to save API key",
        );
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to save API key");
    }
}
