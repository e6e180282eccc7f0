//! Domain layer: aggregates and repository interfaces

pub mod admin;
pub mod api_key;
pub mod repositories;
pub mod user;

pub use admin::{Admin, AdminRepositoryInterface, CreateAdminDto};
pub use api_key::{ApiKey, ApiKeyRepositoryInterface, ApiKeyWithOwner, CreateApiKeyDto};
pub use repositories::{DomainResult, RepositoryProvider};
pub use user::{CreateUserDto, User, UserRepositoryInterface, UserWithKeys};

pub use crate::shared::errors::DomainError;
