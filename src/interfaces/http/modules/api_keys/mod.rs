//! API keys module — issuance and validation

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
