//! Loan management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::prestamo::{Prestamo, PrestamoQuery},
};

use super::DeleteResponse;

/// List loans, optionally filtered by status
#[utoipa::path(
    get,
    path = "/prestamos",
    tag = "prestamos",
    params(PrestamoQuery),
    responses(
        (status = 200, description = "List of loans", body = Vec<Prestamo>),
        (status = 404, description = "No loan matches", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_prestamos(
    State(state): State<crate::AppState>,
    Query(query): Query<PrestamoQuery>,
) -> AppResult<Json<Vec<Prestamo>>> {
    let prestamos = state.services.prestamos.list(&query)?;
    Ok(Json(prestamos))
}

/// Get a loan by id
#[utoipa::path(
    get,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = i64, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Prestamo),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_prestamo(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Prestamo>> {
    let prestamo = state.services.prestamos.get_by_id(id)?;
    Ok(Json(prestamo))
}

/// Register a loan
#[utoipa::path(
    post,
    path = "/prestamos",
    tag = "prestamos",
    request_body = Prestamo,
    responses(
        (status = 201, description = "Loan created", body = Prestamo),
        (status = 400, description = "Loan id already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_prestamo(
    State(state): State<crate::AppState>,
    Json(prestamo): Json<Prestamo>,
) -> AppResult<(StatusCode, Json<Prestamo>)> {
    let prestamo = state.services.prestamos.create(prestamo)?;
    Ok((StatusCode::CREATED, Json(prestamo)))
}

/// Replace a loan record
#[utoipa::path(
    put,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = i64, Path, description = "Loan ID")
    ),
    request_body = Prestamo,
    responses(
        (status = 200, description = "Loan updated", body = Prestamo),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_prestamo(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(prestamo): Json<Prestamo>,
) -> AppResult<Json<Prestamo>> {
    let prestamo = state.services.prestamos.replace(id, prestamo)?;
    Ok(Json(prestamo))
}

/// Delete a loan
#[utoipa::path(
    delete,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = i64, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan deleted", body = DeleteResponse),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_prestamo(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.prestamos.delete(id)?;
    Ok(Json(DeleteResponse::deleted::<Prestamo>()))
}
