//! SeaORM-backed implementation of [`RepositoryProvider`]

use sea_orm::DatabaseConnection;

use super::admin_repository::AdminRepository;
use super::api_key_repository::ApiKeyRepository;
use super::user_repository::UserRepository;
use crate::domain::{
    AdminRepositoryInterface, ApiKeyRepositoryInterface, RepositoryProvider,
    UserRepositoryInterface,
};

/// Bundles every repository over one shared connection pool.
pub struct SeaOrmRepositoryProvider {
    users: UserRepository,
    api_keys: ApiKeyRepository,
    admins: AdminRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            api_keys: ApiKeyRepository::new(db.clone()),
            admins: AdminRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepositoryInterface {
        &self.users
    }

    fn api_keys(&self) -> &dyn ApiKeyRepositoryInterface {
        &self.api_keys
    }

    fn admins(&self) -> &dyn AdminRepositoryInterface {
        &self.admins
    }
}
