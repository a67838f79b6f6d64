//! Router configuration for the HTTP API.

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    create_application, delete_application, get_application, send_mail, AppState,
};
use super::middleware::{create_cors_layer, require_admin, security_headers, AdminState};
use super::openapi::ApiDoc;

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    admin_state: Arc<AdminState>,
    cors_origins: &[String],
) -> Router {
    // Send route (authenticated by the API key in the body)
    let send_routes = Router::new().route("/send", get(send_mail).post(send_mail));

    // Admin routes (admin bearer token required)
    let admin_routes = Router::new()
        .route(
            "/applications",
            put(create_application)
                .post(create_application)
                .get(get_application)
                .delete(delete_application),
        )
        .route_layer(middleware::from_fn(move |req, next| {
            let state = admin_state.clone();
            require_admin(state, req, next)
        }));

    let api_routes = Router::new().merge(send_routes).merge(admin_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(security_headers)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
