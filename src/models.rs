use serde::{Deserialize, Serialize};

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
}

/// Individual user entry in the users listing
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub role: String,
}

/// Response type for the users listing endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
}
