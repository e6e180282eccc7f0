use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

use super::conflict_or_db_err;
use crate::domain::{Admin, AdminRepositoryInterface, CreateAdminDto, DomainResult};
use crate::infrastructure::database::entities::admin;

/// Message returned when an admin registration collides with an existing email
pub const DUPLICATE_ADMIN_EMAIL: &str = "Email is already registered as an admin";

pub struct AdminRepository {
    db: DatabaseConnection,
}

impl AdminRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn admin_model_to_domain(model: admin::Model) -> Admin {
    Admin {
        id: model.id,
        email: model.email,
        password_hash: model.password,
    }
}

#[async_trait]
impl AdminRepositoryInterface for AdminRepository {
    async fn create_admin(&self, dto: CreateAdminDto) -> DomainResult<Admin> {
        let new_admin = admin::ActiveModel {
            id: NotSet,
            email: Set(dto.email),
            password: Set(dto.password_hash),
        };

        let model = new_admin
            .insert(&self.db)
            .await
            .map_err(|e| conflict_or_db_err(e, DUPLICATE_ADMIN_EMAIL))?;

        Ok(admin_model_to_domain(model))
    }

    async fn get_admin_by_email(&self, email: &str) -> DomainResult<Option<Admin>> {
        let model = admin::Entity::find()
            .filter(admin::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(admin_model_to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::database::test_db;

    #[tokio::test]
    async fn create_and_fetch_by_email() {
        let repo = AdminRepository::new(test_db().await);
        let created = repo
            .create_admin(CreateAdminDto {
                email: "root@x.io".into(),
                password_hash: "$2b$04$hash".into(),
            })
            .await
            .unwrap();

        let fetched = repo.get_admin_by_email("root@x.io").await.unwrap();
        assert_eq!(fetched, Some(created));
        assert!(repo.get_admin_by_email("nobody@x.io").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = AdminRepository::new(test_db().await);
        let dto = CreateAdminDto {
            email: "root@x.io".into(),
            password_hash: "h".into(),
        };
        repo.create_admin(dto.clone()).await.unwrap();

        let err = repo.create_admin(dto).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(ref m) if m == DUPLICATE_ADMIN_EMAIL));
    }
}
