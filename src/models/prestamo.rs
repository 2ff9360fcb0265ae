//! Prestamo (loan) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::repository::memory::Entity;

/// Usual values of `estadoPrestamo`. The field itself is free text.
pub const ESTADO_ACTIVO: &str = "Activo";
pub const ESTADO_DEVUELTO: &str = "Devuelto";
pub const ESTADO_ATRASADO: &str = "Atrasado";

/// Loan linking a patron and a book.
///
/// `cedulaUsuario` and `idLibro` are plain references: nothing checks that
/// the patron or the book exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prestamo {
    #[schema(example = 1)]
    pub id_prestamo: i64,
    #[schema(example = 1023456789)]
    pub cedula_usuario: i64,
    #[schema(example = 7)]
    pub id_libro: i64,
    /// Loan date (YYYY-MM-DD)
    #[schema(example = "2024-03-01")]
    pub fecha_prestamo: NaiveDate,
    /// Return date, absent while the book is out
    #[schema(example = "2024-03-15")]
    pub fecha_devolucion: Option<NaiveDate>,
    /// Activo, Devuelto or Atrasado
    #[schema(example = "Activo")]
    pub estado_prestamo: String,
}

impl Entity for Prestamo {
    type Key = i64;
    const NAME: &'static str = "Prestamo";

    fn key(&self) -> &i64 {
        &self.id_prestamo
    }

    fn filter_value(&self) -> Option<&str> {
        Some(&self.estado_prestamo)
    }
}

/// Loan list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PrestamoQuery {
    /// Only loans whose status matches, ignoring case
    pub estado_prestamo: Option<String>,
}
