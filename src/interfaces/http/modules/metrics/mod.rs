//! Prometheus metrics endpoint, HTTP metrics middleware and domain counters

pub mod handlers;
pub mod middleware;
pub mod recorders;

pub use handlers::*;
pub use middleware::http_metrics_middleware;
pub use recorders::*;
