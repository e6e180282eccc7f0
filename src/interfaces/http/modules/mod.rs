pub mod admin;
pub mod api_keys;
pub mod health;
pub mod metrics;
pub mod request_id;
pub mod users;
