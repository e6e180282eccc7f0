use async_trait::async_trait;

use super::{ApiKey, ApiKeyWithOwner, CreateApiKeyDto};
use crate::domain::DomainResult;

#[async_trait]
pub trait ApiKeyRepositoryInterface: Send + Sync {
    /// Inserts the key. The owner is not checked beforehand; a dangling
    /// `user_id` surfaces as the storage layer's foreign-key error.
    async fn create_api_key(&self, dto: CreateApiKeyDto) -> DomainResult<ApiKey>;

    /// Single joined lookup of a key string and its owner.
    async fn find_with_owner(&self, api_key: &str) -> DomainResult<Option<ApiKeyWithOwner>>;

    async fn list_with_owners(&self) -> DomainResult<Vec<ApiKeyWithOwner>>;

    /// Deletes by primary key. Zero affected rows yields `DomainError::NotFound`.
    async fn delete_api_key(&self, id: i32) -> DomainResult<()>;
}
