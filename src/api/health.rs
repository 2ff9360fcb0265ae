//! Welcome and health check endpoints

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Resource collections served by the API
pub const RESOURCES: [&str; 3] = ["/usuarios", "/Libros", "/prestamos"];

#[derive(Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    #[serde(rename = "Bienvenida")]
    pub bienvenida: String,
    /// Available resource paths
    pub recursos: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    )
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        bienvenida: "Hola, bienvenido a la biblioteca (realizada con API rest)".to_string(),
        recursos: RESOURCES.iter().map(|r| r.to_string()).collect(),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
