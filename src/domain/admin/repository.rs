use async_trait::async_trait;

use super::{Admin, CreateAdminDto};
use crate::domain::DomainResult;

#[async_trait]
pub trait AdminRepositoryInterface: Send + Sync {
    /// Inserts the admin. A duplicate email yields `DomainError::Conflict`.
    async fn create_admin(&self, dto: CreateAdminDto) -> DomainResult<Admin>;

    async fn get_admin_by_email(&self, email: &str) -> DomainResult<Option<Admin>>;
}
