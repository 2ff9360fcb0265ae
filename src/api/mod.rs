//! API handlers for the biblioteca REST endpoints

pub mod health;
pub mod libros;
pub mod openapi;
pub mod prestamos;
pub mod usuarios;

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{repository::Entity, AppState};

/// Confirmation returned by delete endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub detail: String,
}

impl DeleteResponse {
    pub fn deleted<T: Entity>() -> Self {
        Self {
            detail: format!("{} eliminado exitosamente.", T::NAME),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let resources = Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health_check))
        // Usuarios
        .route(
            "/usuarios",
            get(usuarios::list_usuarios).post(usuarios::create_usuario),
        )
        .route(
            "/usuarios/:cedula",
            get(usuarios::get_usuario)
                .put(usuarios::update_usuario)
                .delete(usuarios::delete_usuario),
        )
        // Libros
        .route("/Libros", get(libros::list_libros).post(libros::create_libro))
        .route(
            "/Libros/:titulo",
            get(libros::get_libro)
                .put(libros::update_libro)
                .delete(libros::delete_libro),
        )
        // Prestamos
        .route(
            "/prestamos",
            get(prestamos::list_prestamos).post(prestamos::create_prestamo),
        )
        .route(
            "/prestamos/:id",
            get(prestamos::get_prestamo)
                .put(prestamos::update_prestamo)
                .delete(prestamos::delete_prestamo),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(resources)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
