//! Patron management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::usuario::Usuario};

use super::DeleteResponse;

/// List all patrons
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    responses(
        (status = 200, description = "List of patrons", body = Vec<Usuario>),
        (status = 404, description = "No patrons registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_usuarios(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Usuario>>> {
    let usuarios = state.services.usuarios.list()?;
    Ok(Json(usuarios))
}

/// Get a patron by cedula
#[utoipa::path(
    get,
    path = "/usuarios/{cedula}",
    tag = "usuarios",
    params(
        ("cedula" = i64, Path, description = "Patron national id")
    ),
    responses(
        (status = 200, description = "Patron details", body = Usuario),
        (status = 404, description = "Patron not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_usuario(
    State(state): State<crate::AppState>,
    Path(cedula): Path<i64>,
) -> AppResult<Json<Usuario>> {
    let usuario = state.services.usuarios.get_by_cedula(cedula)?;
    Ok(Json(usuario))
}

/// Register a new patron
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "usuarios",
    request_body = Usuario,
    responses(
        (status = 201, description = "Patron created", body = Usuario),
        (status = 400, description = "Cedula already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_usuario(
    State(state): State<crate::AppState>,
    Json(usuario): Json<Usuario>,
) -> AppResult<(StatusCode, Json<Usuario>)> {
    let usuario = state.services.usuarios.create(usuario)?;
    Ok((StatusCode::CREATED, Json(usuario)))
}

/// Replace a patron record
#[utoipa::path(
    put,
    path = "/usuarios/{cedula}",
    tag = "usuarios",
    params(
        ("cedula" = i64, Path, description = "Patron national id")
    ),
    request_body = Usuario,
    responses(
        (status = 200, description = "Patron updated", body = Usuario),
        (status = 404, description = "Patron not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_usuario(
    State(state): State<crate::AppState>,
    Path(cedula): Path<i64>,
    Json(usuario): Json<Usuario>,
) -> AppResult<Json<Usuario>> {
    let usuario = state.services.usuarios.replace(cedula, usuario)?;
    Ok(Json(usuario))
}

/// Delete a patron
#[utoipa::path(
    delete,
    path = "/usuarios/{cedula}",
    tag = "usuarios",
    params(
        ("cedula" = i64, Path, description = "Patron national id")
    ),
    responses(
        (status = 200, description = "Patron deleted", body = DeleteResponse),
        (status = 404, description = "Patron not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_usuario(
    State(state): State<crate::AppState>,
    Path(cedula): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.usuarios.delete(cedula)?;
    Ok(Json(DeleteResponse::deleted::<Usuario>()))
}
