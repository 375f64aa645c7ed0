use crate::models::{User, UsersResponse};
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /api/users handler - Users listing endpoint
///
/// Returns a fixed demo roster. No inputs, no state, always 200.
#[utoipa::path(
    get,
    path = routes::USERS,
    responses(
        (status = 200, description = "List of users", body = UsersResponse)
    ),
    tag = "users"
)]
pub async fn users_handler() -> (StatusCode, Json<UsersResponse>) {
    tracing::debug!("Users listing served");
    (
        StatusCode::OK,
        Json(UsersResponse {
            users: vec![
                User {
                    id: 1,
                    name: "Alice".to_string(),
                    role: "developer".to_string(),
                },
                User {
                    id: 2,
                    name: "Bob".to_string(),
                    role: "devops".to_string(),
                },
                User {
                    id: 3,
                    name: "Charlie".to_string(),
                    role: "qa".to_string(),
                },
            ],
        }),
    )
}
