//! API key aggregate

pub mod model;
pub mod repository;

pub use model::{ApiKey, ApiKeyWithOwner, CreateApiKeyDto};
pub use repository::ApiKeyRepositoryInterface;
