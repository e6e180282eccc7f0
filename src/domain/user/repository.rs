use async_trait::async_trait;

use super::{CreateUserDto, User, UserWithKeys};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Inserts the user. A duplicate email yields `DomainError::Conflict`.
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn list_users_with_keys(&self) -> DomainResult<Vec<UserWithKeys>>;

    /// Deletes by primary key. Zero affected rows yields `DomainError::NotFound`.
    async fn delete_user(&self, id: i32) -> DomainResult<()>;
}
