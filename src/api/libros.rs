//! Catalog endpoints (books are addressed by title)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::libro::Libro};

use super::DeleteResponse;

/// List the catalog
#[utoipa::path(
    get,
    path = "/Libros",
    tag = "libros",
    responses(
        (status = 200, description = "List of books", body = Vec<Libro>),
        (status = 404, description = "Catalog is empty", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_libros(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Libro>>> {
    let libros = state.services.libros.list()?;
    Ok(Json(libros))
}

/// Get a book by title
#[utoipa::path(
    get,
    path = "/Libros/{Titulo}",
    tag = "libros",
    params(
        ("Titulo" = String, Path, description = "Exact book title")
    ),
    responses(
        (status = 200, description = "Book details", body = Libro),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_libro(
    State(state): State<crate::AppState>,
    Path(titulo): Path<String>,
) -> AppResult<Json<Libro>> {
    let libro = state.services.libros.get_by_titulo(&titulo)?;
    Ok(Json(libro))
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/Libros",
    tag = "libros",
    request_body = Libro,
    responses(
        (status = 201, description = "Book created", body = Libro),
        (status = 400, description = "Title already in the catalog", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_libro(
    State(state): State<crate::AppState>,
    Json(libro): Json<Libro>,
) -> AppResult<(StatusCode, Json<Libro>)> {
    let libro = state.services.libros.create(libro)?;
    Ok((StatusCode::CREATED, Json(libro)))
}

/// Replace a book record
#[utoipa::path(
    put,
    path = "/Libros/{Titulo}",
    tag = "libros",
    params(
        ("Titulo" = String, Path, description = "Exact book title")
    ),
    request_body = Libro,
    responses(
        (status = 200, description = "Book updated", body = Libro),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_libro(
    State(state): State<crate::AppState>,
    Path(titulo): Path<String>,
    Json(libro): Json<Libro>,
) -> AppResult<Json<Libro>> {
    let libro = state.services.libros.replace(&titulo, libro)?;
    Ok(Json(libro))
}

/// Remove a book from the catalog
#[utoipa::path(
    delete,
    path = "/Libros/{Titulo}",
    tag = "libros",
    params(
        ("Titulo" = String, Path, description = "Exact book title")
    ),
    responses(
        (status = 200, description = "Book deleted", body = DeleteResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_libro(
    State(state): State<crate::AppState>,
    Path(titulo): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.libros.delete(&titulo)?;
    Ok(Json(DeleteResponse::deleted::<Libro>()))
}
