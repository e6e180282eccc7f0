//! User registration DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "first_name": "Ada",
    "last_name": "Lovelace",
    "email": "ada@example.com"
}))]
pub struct SaveUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "first_name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "last_name is required"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "email is required"))]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveUserResponse {
    pub success: bool,
    pub message: String,
    pub user_id: i32,
}
