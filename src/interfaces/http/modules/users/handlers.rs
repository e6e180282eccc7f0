//! End-user self-registration handler

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::{SaveUserRequest, SaveUserResponse};
use crate::application::UserService;
use crate::interfaces::http::common::{ApiError, MessageResponse, ValidatedJson};
use crate::interfaces::http::modules::metrics::record_user_registered;

#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/save-user",
    tag = "Users",
    request_body = SaveUserRequest,
    responses(
        (status = 200, description = "User registered", body = SaveUserResponse),
        (status = 400, description = "Missing fields or email already registered", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn save_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<SaveUserRequest>,
) -> Result<Json<SaveUserResponse>, ApiError> {
    let user = state
        .user_service
        .register(&request.first_name, &request.last_name, &request.email)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to save user"))?;
    record_user_registered();

    Ok(Json(SaveUserResponse {
        success: true,
        message: "User saved".to_string(),
        user_id: user.id,
    }))
}
