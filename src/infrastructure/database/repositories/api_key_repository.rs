use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::user_repository::user_model_to_domain;
use crate::domain::{
    ApiKey, ApiKeyRepositoryInterface, ApiKeyWithOwner, CreateApiKeyDto, DomainError,
    DomainResult,
};
use crate::infrastructure::database::entities::{api_key, user};

pub struct ApiKeyRepository {
    db: DatabaseConnection,
}

impl ApiKeyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn api_key_model_to_domain(model: api_key::Model) -> ApiKey {
    ApiKey {
        id: model.id,
        api_key: model.api_key,
        service_name: model.service_name,
        user_id: model.user_id,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

/// Rows whose owner is gone are skipped, matching an inner join.
fn with_owner(row: (api_key::Model, Option<user::Model>)) -> Option<ApiKeyWithOwner> {
    let (key, owner) = row;
    owner.map(|owner| ApiKeyWithOwner {
        key: api_key_model_to_domain(key),
        owner: user_model_to_domain(owner),
    })
}

#[async_trait]
impl ApiKeyRepositoryInterface for ApiKeyRepository {
    async fn create_api_key(&self, dto: CreateApiKeyDto) -> DomainResult<ApiKey> {
        let new_key = api_key::ActiveModel {
            id: NotSet,
            api_key: Set(dto.api_key),
            service_name: Set(dto.service_name),
            user_id: Set(dto.user_id),
            expires_at: Set(dto.expires_at),
            created_at: Set(Utc::now()),
        };

        let model = new_key.insert(&self.db).await?;
        Ok(api_key_model_to_domain(model))
    }

    async fn find_with_owner(&self, key: &str) -> DomainResult<Option<ApiKeyWithOwner>> {
        let row = api_key::Entity::find()
            .filter(api_key::Column::ApiKey.eq(key))
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?;

        Ok(row.and_then(with_owner))
    }

    async fn list_with_owners(&self) -> DomainResult<Vec<ApiKeyWithOwner>> {
        let rows = api_key::Entity::find()
            .order_by_asc(api_key::Column::Id)
            .find_also_related(user::Entity)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().filter_map(with_owner).collect())
    }

    async fn delete_api_key(&self, id: i32) -> DomainResult<()> {
        let result = api_key::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "API key",
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
    use crate::domain::{CreateUserDto, UserRepositoryInterface};
    use crate::infrastructure::database::repositories::user_repository::UserRepository;
    use crate::infrastructure::database::test_db;
    use chrono::NaiveDate;

    fn key_dto(key: &str, user_id: i32) -> CreateApiKeyDto {
        CreateApiKeyDto {
            api_key: key.into(),
            service_name: "billing".into(),
            user_id,
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn unknown_owner_is_a_storage_error() {
        let repo = ApiKeyRepository::new(test_db().await);
        let err = repo.create_api_key(key_dto("KEY-X", 999)).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn lookup_joins_owner() {
        let db = test_db().await;
        let users = UserRepository::new(db.clone());
        let repo = ApiKeyRepository::new(db);

        let owner = users
            .create_user(CreateUserDto {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@x.io".into(),
                registered_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            })
            .await
            .unwrap();
        let created = repo.create_api_key(key_dto("KEY-X", owner.id)).await.unwrap();

        let found = repo.find_with_owner("KEY-X").await.unwrap().unwrap();
        assert_eq!(found.key.id, created.id);
        assert_eq!(found.key.service_name, "billing");
        assert_eq!(found.key.expires_at, None);
        assert_eq!(found.owner.first_name, "Ada");
        assert!(repo.find_with_owner("KEY-Y").await.unwrap().is_none());

        let listed = repo.list_with_owners().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].owner.full_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let repo = ApiKeyRepository::new(test_db().await);
        let err = repo.delete_api_key(7).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "API key", .. }));
    }
}
