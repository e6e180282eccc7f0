//! API key issuance and validation

pub mod service;

pub use service::{ApiKeyService, KeyValidation};
