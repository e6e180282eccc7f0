use chrono::{DateTime, Utc};

use crate::domain::User;

/// API key issued to a user for a named service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey {
    pub id: i32,
    /// The full key string, e.g. `KEY-1A2B3C4D-...`
    pub api_key: String,
    pub service_name: String,
    pub user_id: i32,
    /// `None` means the key never expires
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ApiKey {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// An API key joined with its owning user
#[derive(Clone, Debug)]
pub struct ApiKeyWithOwner {
    pub key: ApiKey,
    pub owner: User,
}

#[derive(Debug, Clone)]
pub struct CreateApiKeyDto {
    pub api_key: String,
    pub service_name: String,
    pub user_id: i32,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn key(expires_at: Option<DateTime<Utc>>) -> ApiKey {
        ApiKey {
            id: 1,
            api_key: "KEY-00000000-00000000-00000000-00000000".into(),
            service_name: "billing".into(),
            user_id: 1,
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn key_without_expiry_never_expires() {
        let far_future = Utc::now() + Duration::days(365 * 100);
        assert!(!key(None).is_expired_at(far_future));
    }

    #[test]
    fn key_expires_at_its_deadline() {
        let now = Utc::now();
        let k = key(Some(now));
        assert!(k.is_expired_at(now));
        assert!(!k.is_expired_at(now - Duration::seconds(1)));
    }
}
