use crate::routes;

/// Greeting returned by the root endpoint
pub const GREETING: &str = "Hello from Rust Axum!";

/// GET / handler - Greeting endpoint
///
/// Always responds with HTTP 200 and a fixed plain-text greeting.
/// Consumes no input and touches no state.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Plain-text greeting", body = String)
    ),
    tag = "greeting"
)]
pub async fn root_handler() -> &'static str {
    tracing::debug!("Greeting served");
    GREETING
}
