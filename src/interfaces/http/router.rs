//! API Router with Swagger UI

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{delete, get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::MessageResponse;
use super::modules::{admin, api_keys, health, metrics, request_id, users};
use crate::application::{AdminService, ApiKeyService, UserService};

/// Everything the handlers need. Axum hands each handler its own slice
/// through `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub api_key_service: Arc<ApiKeyService>,
    pub admin_service: Arc<AdminService>,
    pub db: DatabaseConnection,
    pub metrics_handle: PrometheusHandle,
    pub started_at: Arc<Instant>,
}

impl FromRef<AppState> for users::UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        users::UserHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<AppState> for api_keys::ApiKeyHandlerState {
    fn from_ref(s: &AppState) -> Self {
        api_keys::ApiKeyHandlerState {
            api_key_service: Arc::clone(&s.api_key_service),
        }
    }
}

impl FromRef<AppState> for admin::AdminHandlerState {
    fn from_ref(s: &AppState) -> Self {
        admin::AdminHandlerState {
            admin_service: Arc::clone(&s.admin_service),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        health::HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for metrics::MetricsState {
    fn from_ref(s: &AppState) -> Self {
        metrics::MetricsState {
            handle: s.metrics_handle.clone(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::save_user,
        api_keys::create_api_key,
        api_keys::check_api_key,
        admin::register_admin,
        admin::login_admin,
        admin::list_users,
        admin::list_api_keys,
        admin::delete_user,
        admin::delete_api_key,
        health::health_check,
        metrics::prometheus_metrics,
    ),
    components(
        schemas(
            MessageResponse,
            users::SaveUserRequest,
            users::SaveUserResponse,
            api_keys::CreateApiKeyRequest,
            api_keys::CreatedApiKeyResponse,
            api_keys::CheckApiKeyRequest,
            api_keys::CheckApiKeyResponse,
            admin::AdminCredentials,
            admin::AdminUserDto,
            admin::AdminApiKeyDto,
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Users", description = "End-user self-registration"),
        (name = "API Keys", description = "Issuing and validating API keys"),
        (name = "Admin", description = "Admin registration, login, listing and deletion"),
        (name = "Monitoring", description = "Health and Prometheus metrics"),
    ),
    info(
        title = "API Key Service",
        version = "0.1.0",
        description = "Issue per-service API keys to registered users and validate them",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the full router. When `static_dir` is set, unmatched `GET`s are
/// served from it (`/` resolves to its `index.html`).
pub fn create_api_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin_routes = Router::new()
        .route("/register", post(admin::register_admin))
        .route("/login", post(admin::login_admin))
        .route("/users", get(admin::list_users))
        .route("/users/{id}", delete(admin::delete_user))
        .route("/apikeys", get(admin::list_api_keys))
        .route("/apikeys/{id}", delete(admin::delete_api_key));

    let api_routes = Router::new()
        .route("/save-user", post(users::save_user))
        .route("/create", post(api_keys::create_api_key))
        .route("/cekapi", post(api_keys::check_api_key))
        .nest("/admin", admin_routes)
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let router = Router::new().merge(api_routes).merge(swagger_routes);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
