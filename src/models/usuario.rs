//! Usuario (library patron) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repository::memory::Entity;

/// Library patron, identified by national id number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Usuario {
    /// National id number, unique per patron
    #[schema(example = 1023456789)]
    pub cedula: i64,
    #[schema(example = "Ana Gomez")]
    pub nombre: String,
    #[schema(example = "3001234567")]
    pub telefono: Option<String>,
    #[schema(example = "ana@example.com")]
    pub correo: Option<String>,
}

impl Entity for Usuario {
    type Key = i64;
    const NAME: &'static str = "Usuario";

    fn key(&self) -> &i64 {
        &self.cedula
    }
}
