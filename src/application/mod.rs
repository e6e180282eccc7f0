//! Application layer: use-case services over the repository traits

pub mod admin;
pub mod identity;
pub mod keys;

pub use admin::AdminService;
pub use identity::UserService;
pub use keys::{ApiKeyService, KeyValidation};
