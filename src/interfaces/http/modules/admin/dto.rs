//! Admin DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{ApiKeyWithOwner, UserWithKeys};

/// Body of both `/admin/register` and `/admin/login`
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "email": "admin@example.com",
    "password": "correct horse battery staple"
}))]
pub struct AdminCredentials {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// Comma-separated API keys, `null` when the user has none
    pub assigned_keys: Option<String>,
}

impl From<UserWithKeys> for AdminUserDto {
    fn from(entry: UserWithKeys) -> Self {
        let assigned_keys = entry.assigned_keys();
        let user = entry.user;
        Self {
            id: user.id,
            firstname: user.first_name,
            lastname: user.last_name,
            email: user.email,
            created_at: user.created_at,
            assigned_keys,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminApiKeyDto {
    pub id: i32,
    pub service_name: String,
    pub api_key: String,
    pub created_at: DateTime<Utc>,
    /// Owner's full name
    pub assigned_to: String,
}

impl From<ApiKeyWithOwner> for AdminApiKeyDto {
    fn from(entry: ApiKeyWithOwner) -> Self {
        Self {
            assigned_to: entry.owner.full_name(),
            id: entry.key.id,
            service_name: entry.key.service_name,
            api_key: entry.key.api_key,
            created_at: entry.key.created_at,
        }
    }
}
