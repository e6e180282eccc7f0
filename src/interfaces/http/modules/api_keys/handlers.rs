//! API key issuance and validation handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::{CheckApiKeyRequest, CheckApiKeyResponse, CreateApiKeyRequest, CreatedApiKeyResponse};
use crate::application::ApiKeyService;
use crate::interfaces::http::common::{ApiError, MessageResponse, ValidatedJson};
use crate::interfaces::http::modules::metrics::{record_key_issued, record_key_validation};

#[derive(Clone)]
pub struct ApiKeyHandlerState {
    pub api_key_service: Arc<ApiKeyService>,
}

#[utoipa::path(
    post,
    path = "/create",
    tag = "API Keys",
    request_body = CreateApiKeyRequest,
    responses(
        (status = 200, description = "API key created", body = CreatedApiKeyResponse),
        (status = 400, description = "Missing fields", body = MessageResponse),
        (status = 500, description = "Storage failure, including an unknown user_id", body = MessageResponse)
    )
)]
pub async fn create_api_key(
    State(state): State<ApiKeyHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateApiKeyRequest>,
) -> Result<Json<CreatedApiKeyResponse>, ApiError> {
    // `required` validation guarantees presence.
    let user_id = request.user_id.unwrap_or_default();

    let key = state
        .api_key_service
        .issue(&request.service_name, user_id, request.expires_in_days)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to save API key"))?;
    record_key_issued();

    Ok(Json(CreatedApiKeyResponse {
        api_key: key.api_key,
        message: "API key created and saved".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/cekapi",
    tag = "API Keys",
    request_body = CheckApiKeyRequest,
    responses(
        (status = 200, description = "Lookup result; `valid` is false for unknown or expired keys", body = CheckApiKeyResponse),
        (status = 400, description = "Missing api_key", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn check_api_key(
    State(state): State<ApiKeyHandlerState>,
    ValidatedJson(request): ValidatedJson<CheckApiKeyRequest>,
) -> Result<Json<CheckApiKeyResponse>, ApiError> {
    let outcome = state
        .api_key_service
        .validate(&request.api_key)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to check API key"))?;
    record_key_validation(&outcome);

    Ok(Json(outcome.into()))
}
