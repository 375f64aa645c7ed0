use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, User, UsersResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-axum-greeter API",
        version = "1.0.0",
        description = "A minimal greeting service with a liveness probe"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::users::users_handler
    ),
    components(
        schemas(HealthResponse, User, UsersResponse)
    ),
    tags(
        (name = "greeting", description = "Greeting operations"),
        (name = "health", description = "Health check operations"),
        (name = "users", description = "Users listing operations")
    )
)]
pub struct ApiDoc;
