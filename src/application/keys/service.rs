//! API key lifecycle service

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::domain::{ApiKey, CreateApiKeyDto, DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::crypto::api_key::generate_api_key;

/// Outcome of looking up a key string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValidation {
    Valid {
        service_name: String,
        created_at: DateTime<Utc>,
        /// First name of the owning user
        user: String,
    },
    NotFound,
    Expired {
        expired_at: DateTime<Utc>,
    },
}

impl KeyValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, KeyValidation::Valid { .. })
    }
}

pub struct ApiKeyService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ApiKeyService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Mint a key for `service_name` owned by `user_id`.
    ///
    /// The owner is not looked up first; a dangling id fails on the
    /// foreign key. Without `expires_in_days` the key never expires.
    pub async fn issue(
        &self,
        service_name: &str,
        user_id: i32,
        expires_in_days: Option<i64>,
    ) -> DomainResult<ApiKey> {
        if service_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Service name and user ID are required".into(),
            ));
        }
        if let Some(days) = expires_in_days {
            if days <= 0 {
                return Err(DomainError::Validation(
                    "expires_in_days must be a positive number of days".into(),
                ));
            }
        }

        let expires_at = expires_in_days
            .and_then(Duration::try_days)
            .map(|ttl| Utc::now() + ttl);

        let key = self
            .repos
            .api_keys()
            .create_api_key(CreateApiKeyDto {
                api_key: generate_api_key(),
                service_name: service_name.to_string(),
                user_id,
                expires_at,
            })
            .await?;

        info!(key_id = key.id, user_id, service = %key.service_name, "API key issued");
        Ok(key)
    }

    /// Look a key string up together with its owner.
    pub async fn validate(&self, api_key: &str) -> DomainResult<KeyValidation> {
        if api_key.trim().is_empty() {
            return Err(DomainError::Validation("API key is required".into()));
        }

        let Some(found) = self.repos.api_keys().find_with_owner(api_key).await? else {
            debug!("API key lookup missed");
            return Ok(KeyValidation::NotFound);
        };

        if found.key.is_expired_at(Utc::now()) {
            if let Some(expired_at) = found.key.expires_at {
                return Ok(KeyValidation::Expired { expired_at });
            }
        }

        Ok(KeyValidation::Valid {
            service_name: found.key.service_name,
            created_at: found.key.created_at,
            user: found.owner.first_name,
        })
    }
}
