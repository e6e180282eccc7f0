//! Admin service — registration, one-shot login, listing and deletion

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    Admin, ApiKeyWithOwner, CreateAdminDto, DomainError, DomainResult, RepositoryProvider,
    UserWithKeys,
};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::shared::normalize_email;

/// Returned for both unknown emails and wrong passwords
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AdminService {
    repos: Arc<dyn RepositoryProvider>,
    bcrypt_cost: u32,
}

impl AdminService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, bcrypt_cost: u32) -> Self {
        Self { repos, bcrypt_cost }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Register an admin. Only the bcrypt hash of `password` is stored.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<Admin> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::Validation(
                "Email and password are required".into(),
            ));
        }

        let password = password.to_string();
        let cost = self.bcrypt_cost;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| DomainError::Crypto(format!("Hashing task failed: {}", e)))?
            .map_err(|e| DomainError::Crypto(format!("Failed to hash password: {}", e)))?;

        let admin = self
            .repos
            .admins()
            .create_admin(CreateAdminDto {
                email: normalize_email(email),
                password_hash,
            })
            .await?;

        info!(admin_id = admin.id, email = %admin.email, "Admin registered");
        Ok(admin)
    }

    /// Check an email/password pair. No session is created.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<Admin> {
        let email = normalize_email(email);
        let Some(admin) = self.repos.admins().get_admin_by_email(&email).await? else {
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.into()));
        };

        let password = password.to_string();
        let stored = admin.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
            .await
            .map_err(|e| DomainError::Crypto(format!("Verification task failed: {}", e)))?
            .unwrap_or_else(|e| {
                warn!(admin_id = admin.id, "Stored admin password hash is unreadable: {}", e);
                false
            });

        if !valid {
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        info!(admin_id = admin.id, "Admin logged in");
        Ok(admin)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_users(&self) -> DomainResult<Vec<UserWithKeys>> {
        self.repos.users().list_users_with_keys().await
    }

    pub async fn list_api_keys(&self) -> DomainResult<Vec<ApiKeyWithOwner>> {
        self.repos.api_keys().list_with_owners().await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Delete a user. Their API keys go with them through the FK cascade.
    pub async fn delete_user(&self, id: i32) -> DomainResult<()> {
        self.repos.users().delete_user(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }

    pub async fn delete_api_key(&self, id: i32) -> DomainResult<()> {
        self.repos.api_keys().delete_api_key(id).await?;
        info!(key_id = id, "API key deleted");
        Ok(())
    }
}
