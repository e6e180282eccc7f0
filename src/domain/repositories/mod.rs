//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::admin::AdminRepositoryInterface;
use super::api_key::ApiKeyRepositoryInterface;
use super::user::UserRepositoryInterface;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Services hold an `Arc<dyn RepositoryProvider>` and request only the
/// repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let users = repos.users().list_users_with_keys().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepositoryInterface;
    fn api_keys(&self) -> &dyn ApiKeyRepositoryInterface;
    fn admins(&self) -> &dyn AdminRepositoryInterface;
}
