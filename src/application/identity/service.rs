//! User registration service — application-layer orchestration

use std::sync::Arc;

use tracing::info;

use crate::domain::{CreateUserDto, DomainError, DomainResult, RepositoryProvider, User};
use crate::shared::{normalize_email, today_local};

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Register a new end-user.
    ///
    /// Both registration dates are stamped with today's local date. The
    /// email is stored lowercased and its uniqueness is decided by the insert
    /// itself, so concurrent registrations of one address cannot both succeed.
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> DomainResult<User> {
        if [first_name, last_name, email]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(DomainError::Validation(
                "First name, last name and email are required".into(),
            ));
        }

        let user = self
            .repos
            .users()
            .create_user(CreateUserDto {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: normalize_email(email),
                registered_on: today_local(),
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "New user registered");
        Ok(user)
    }
}
