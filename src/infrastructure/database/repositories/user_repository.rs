use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use super::conflict_or_db_err;
use crate::domain::{
    CreateUserDto, DomainError, DomainResult, User, UserRepositoryInterface, UserWithKeys,
};
use crate::infrastructure::database::entities::{api_key, user};

/// Message returned when a registration collides with an existing email
pub const DUPLICATE_USER_EMAIL: &str = "Email is already registered";

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        first_name: model.firstname,
        last_name: model.lastname,
        email: model.email,
        start_date: model.start_date,
        last_date: model.last_date,
        created_at: model.created_at,
    }
}

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let new_user = user::ActiveModel {
            id: NotSet,
            firstname: Set(dto.first_name),
            lastname: Set(dto.last_name),
            email: Set(dto.email),
            start_date: Set(dto.registered_on),
            last_date: Set(dto.registered_on),
            created_at: Set(Utc::now()),
        };

        let model = new_user
            .insert(&self.db)
            .await
            .map_err(|e| conflict_or_db_err(e, DUPLICATE_USER_EMAIL))?;

        Ok(user_model_to_domain(model))
    }

    async fn list_users_with_keys(&self) -> DomainResult<Vec<UserWithKeys>> {
        let rows = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .find_with_related(api_key::Entity)
            .order_by_asc(api_key::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, keys)| UserWithKeys {
                user: user_model_to_domain(model),
                api_keys: keys.into_iter().map(|k| k.api_key).collect(),
            })
            .collect())
    }

    async fn delete_user(&self, id: i32) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiKeyRepositoryInterface, CreateApiKeyDto};
    use crate::infrastructure::database::repositories::api_key_repository::ApiKeyRepository;
    use crate::infrastructure::database::test_db;
    use chrono::NaiveDate;
    use sea_orm::PaginatorTrait;

    fn dto(email: &str) -> CreateUserDto {
        CreateUserDto {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: email.into(),
            registered_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_and_stamps_dates() {
        let repo = UserRepository::new(test_db().await);

        let first = repo.create_user(dto("ada@x.io")).await.unwrap();
        let second = repo.create_user(dto("grace@x.io")).await.unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.start_date, first.last_date);
        assert_eq!(first.start_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = UserRepository::new(test_db().await);
        repo.create_user(dto("ada@x.io")).await.unwrap();

        let err = repo.create_user(dto("ada@x.io")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(ref m) if m == DUPLICATE_USER_EMAIL));
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let repo = UserRepository::new(test_db().await);
        let err = repo.delete_user(42).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));
    }

    #[tokio::test]
    async fn listing_groups_keys_and_delete_cascades() {
        let db = test_db().await;
        let users = UserRepository::new(db.clone());
        let keys = ApiKeyRepository::new(db.clone());

        let ada = users.create_user(dto("ada@x.io")).await.unwrap();
        let grace = users.create_user(dto("grace@x.io")).await.unwrap();
        for key in ["KEY-A", "KEY-B"] {
            keys.create_api_key(CreateApiKeyDto {
                api_key: key.into(),
                service_name: "billing".into(),
                user_id: ada.id,
                expires_at: None,
            })
            .await
            .unwrap();
        }

        let listed = users.list_users_with_keys().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].user.id, ada.id);
        assert_eq!(listed[0].assigned_keys().as_deref(), Some("KEY-A,KEY-B"));
        assert_eq!(listed[1].user.id, grace.id);
        assert_eq!(listed[1].assigned_keys(), None);

        assert_eq!(api_key::Entity::find().count(&db).await.unwrap(), 2);

        users.delete_user(ada.id).await.unwrap();
        assert_eq!(api_key::Entity::find().count(&db).await.unwrap(), 0);
        assert!(keys.find_with_owner("KEY-A").await.unwrap().is_none());
    }
}
