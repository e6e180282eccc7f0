//! Database entities module

pub mod admin;
pub mod api_key;
pub mod user;

pub use admin::Entity as Admin;
pub use api_key::Entity as ApiKey;
pub use user::Entity as User;
