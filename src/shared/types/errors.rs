use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Storage(String),

    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl DomainError {
    /// Client-side failures carry a message safe to echo back;
    /// everything else is an infrastructure failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::NotFound { .. }
                | DomainError::Validation(_)
                | DomainError::Conflict(_)
                | DomainError::Unauthorized(_)
        )
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Storage(e.to_string())
    }
}
