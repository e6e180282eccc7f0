//! HTTP REST API interfaces
//!
//! - `common`: shared response/error types and the validating JSON extractor
//! - `modules`: handlers grouped by resource
//! - `router`: route table, middleware stack and Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};
