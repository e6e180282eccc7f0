//! Admin handlers
//!
//! Listing and deletion carry no authentication; login is a one-shot
//! credential check that issues nothing.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{AdminApiKeyDto, AdminCredentials, AdminUserDto};
use crate::application::AdminService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{ApiError, MessageResponse, ValidatedJson};
use crate::interfaces::http::modules::metrics::record_admin_login;

#[derive(Clone)]
pub struct AdminHandlerState {
    pub admin_service: Arc<AdminService>,
}

#[utoipa::path(
    post,
    path = "/admin/register",
    tag = "Admin",
    request_body = AdminCredentials,
    responses(
        (status = 200, description = "Admin registered", body = MessageResponse),
        (status = 400, description = "Missing fields or email already registered", body = MessageResponse),
        (status = 500, description = "Storage or hashing failure", body = MessageResponse)
    )
)]
pub async fn register_admin(
    State(state): State<AdminHandlerState>,
    ValidatedJson(request): ValidatedJson<AdminCredentials>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .admin_service
        .register(&request.email, &request.password)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to register admin"))?;

    Ok(Json(MessageResponse::ok("Admin registered")))
}

#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "Admin",
    request_body = AdminCredentials,
    responses(
        (status = 200, description = "Credentials accepted", body = MessageResponse),
        (status = 400, description = "Missing fields", body = MessageResponse),
        (status = 401, description = "Invalid email or password", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn login_admin(
    State(state): State<AdminHandlerState>,
    ValidatedJson(request): ValidatedJson<AdminCredentials>,
) -> Result<Json<MessageResponse>, ApiError> {
    let outcome = state
        .admin_service
        .login(&request.email, &request.password)
        .await;
    record_admin_login(outcome.is_ok());

    outcome.map_err(|e| ApiError::from_domain(e, "Failed to log in"))?;
    Ok(Json(MessageResponse::ok("Login successful")))
}

#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "Admin",
    responses(
        (status = 200, description = "All users with their keys", body = Vec<AdminUserDto>),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_users(
    State(state): State<AdminHandlerState>,
) -> Result<Json<Vec<AdminUserDto>>, ApiError> {
    let users = state
        .admin_service
        .list_users()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to list users"))?;

    Ok(Json(users.into_iter().map(AdminUserDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/admin/apikeys",
    tag = "Admin",
    responses(
        (status = 200, description = "All API keys with their owners", body = Vec<AdminApiKeyDto>),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_api_keys(
    State(state): State<AdminHandlerState>,
) -> Result<Json<Vec<AdminApiKeyDto>>, ApiError> {
    let keys = state
        .admin_service
        .list_api_keys()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to list API keys"))?;

    Ok(Json(keys.into_iter().map(AdminApiKeyDto::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    tag = "Admin",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AdminHandlerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = match parse_id(&raw_id, "User") {
        Ok(id) => state.admin_service.delete_user(id).await,
        Err(e) => Err(e),
    };
    deleted.map_err(|e| deletion_error(e, "User not found", "Failed to delete user"))?;

    Ok(Json(MessageResponse::ok("User deleted")))
}

#[utoipa::path(
    delete,
    path = "/admin/apikeys/{id}",
    tag = "Admin",
    params(("id" = String, Path, description = "API key ID")),
    responses(
        (status = 200, description = "API key deleted", body = MessageResponse),
        (status = 404, description = "API key not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn delete_api_key(
    State(state): State<AdminHandlerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = match parse_id(&raw_id, "API key") {
        Ok(id) => state.admin_service.delete_api_key(id).await,
        Err(e) => Err(e),
    };
    deleted.map_err(|e| deletion_error(e, "API key not found", "Failed to delete API key"))?;

    Ok(Json(MessageResponse::ok("API key deleted")))
}

/// An id that does not fit an `i32` cannot match any row.
fn parse_id(raw: &str, entity: &'static str) -> Result<i32, DomainError> {
    raw.parse().map_err(|_| DomainError::NotFound {
        entity,
        field: "id",
        value: raw.to_string(),
    })
}

fn deletion_error(err: DomainError, not_found: &str, server_message: &str) -> ApiError {
    match err {
        DomainError::NotFound { .. } => ApiError::new(StatusCode::NOT_FOUND, not_found),
        other => ApiError::from_domain(other, server_message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_ids_are_not_found() {
        assert_eq!(parse_id("42", "User").unwrap(), 42);
        assert_eq!(parse_id("-1", "User").unwrap(), -1);
        for raw in ["abc", "99999999999", "1.5", ""] {
            assert!(matches!(
                parse_id(raw, "User"),
                Err(DomainError::NotFound { entity: "User", .. })
            ));
        }
    }

    #[test]
    fn not_found_maps_to_fixed_message() {
        let err = deletion_error(
            DomainError::NotFound {
                entity: "User",
                field: "id",
                value: "abc".into(),
            },
            "User not found",
            "Failed to delete user",
        );
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "User not found");
    }
}
