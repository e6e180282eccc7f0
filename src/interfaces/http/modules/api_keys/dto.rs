//! API Key DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::KeyValidation;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "service_name": "billing",
    "user_id": 1
}))]
pub struct CreateApiKeyRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "service_name is required"))]
    pub service_name: String,
    #[validate(required(message = "user_id is required"))]
    pub user_id: Option<i32>,
    /// Optional lifetime; the key never expires when omitted
    #[validate(range(min = 1, max = 3650, message = "expires_in_days must be between 1 and 3650"))]
    pub expires_in_days: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedApiKeyResponse {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckApiKeyRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "api_key is required"))]
    pub api_key: String,
}

/// Result of `/cekapi`. An unknown or expired key is still a 200.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckApiKeyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// First name of the key owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<KeyValidation> for CheckApiKeyResponse {
    fn from(outcome: KeyValidation) -> Self {
        match outcome {
            KeyValidation::Valid {
                service_name,
                created_at,
                user,
            } => Self {
                valid: true,
                service_name: Some(service_name),
                created_at: Some(created_at),
                user: Some(user),
                message: None,
            },
            KeyValidation::NotFound => Self::invalid("API key not found"),
            KeyValidation::Expired { expired_at } => {
                Self::invalid(format!("API key expired at {}", expired_at.to_rfc3339()))
            }
        }
    }
}

impl CheckApiKeyResponse {
    fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            service_name: None,
            created_at: None,
            user: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_serializes_without_key_fields() {
        let body = serde_json::to_value(CheckApiKeyResponse::from(KeyValidation::NotFound)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"valid": false, "message": "API key not found"})
        );
    }

    #[test]
    fn valid_serializes_without_message() {
        let body = serde_json::to_value(CheckApiKeyResponse::from(KeyValidation::Valid {
            service_name: "billing".into(),
            created_at: Utc::now(),
            user: "Ada".into(),
        }))
        .unwrap();
        assert_eq!(body["valid"], true);
        assert_eq!(body["service_name"], "billing");
        assert_eq!(body["user"], "Ada");
        assert!(body["created_at"].is_string());
        assert!(body.get("message").is_none());
    }

    #[test]
    fn created_key_uses_camel_case_field() {
        let body = serde_json::to_value(CreatedApiKeyResponse {
            api_key: "KEY-1".into(),
            message: "ok".into(),
        })
        .unwrap();
        assert_eq!(body["apiKey"], "KEY-1");
    }
}
