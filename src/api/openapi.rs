//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, libros, prestamos, usuarios};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Bibliotecaria",
        version = "1.0.0",
        description = "API para sistema Bibliotecario"
    ),
    paths(
        // Health
        health::welcome,
        health::health_check,
        // Usuarios
        usuarios::list_usuarios,
        usuarios::get_usuario,
        usuarios::create_usuario,
        usuarios::update_usuario,
        usuarios::delete_usuario,
        // Libros
        libros::list_libros,
        libros::get_libro,
        libros::create_libro,
        libros::update_libro,
        libros::delete_libro,
        // Prestamos
        prestamos::list_prestamos,
        prestamos::get_prestamo,
        prestamos::create_prestamo,
        prestamos::update_prestamo,
        prestamos::delete_prestamo,
    ),
    components(
        schemas(
            crate::models::usuario::Usuario,
            crate::models::libro::Libro,
            crate::models::prestamo::Prestamo,
            crate::models::prestamo::PrestamoQuery,
            crate::api::DeleteResponse,
            health::WelcomeResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Welcome and health check endpoints"),
        (name = "usuarios", description = "Patron management"),
        (name = "libros", description = "Catalog management"),
        (name = "prestamos", description = "Loan management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
