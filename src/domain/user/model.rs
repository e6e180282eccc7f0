use chrono::{DateTime, NaiveDate, Utc};

/// Registered end-user who can own API keys
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Registration date
    pub start_date: NaiveDate,
    /// Last activity date; equal to `start_date` since users are never updated
    pub last_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A user together with every API key string assigned to them
#[derive(Clone, Debug)]
pub struct UserWithKeys {
    pub user: User,
    pub api_keys: Vec<String>,
}

impl UserWithKeys {
    /// Comma-joined key strings, `None` when the user owns no key.
    pub fn assigned_keys(&self) -> Option<String> {
        if self.api_keys.is_empty() {
            None
        } else {
            Some(self.api_keys.join(","))
        }
    }
}
