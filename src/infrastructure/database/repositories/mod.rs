//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod admin_repository;
pub mod api_key_repository;
pub mod repository_provider;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

/// Maps a UNIQUE violation to `DomainError::Conflict(message)`, any other
/// error to `DomainError::Storage`.
pub(crate) fn conflict_or_db_err(e: DbErr, message: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Conflict(message.to_string()),
        _ => e.into(),
    }
}
