use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router.
///
/// Unknown paths and wrong methods fall through to axum's defaults
/// (404 / 405) - no custom fallback is installed.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::USERS, get(handlers::users_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
