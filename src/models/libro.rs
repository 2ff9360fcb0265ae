//! Libro (catalog book) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repository::memory::Entity;

/// Book record, identified by its title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Libro {
    #[serde(rename = "Titulo", alias = "titulo")]
    #[schema(example = "Cien años de Soledad")]
    pub titulo: String,
    #[serde(rename = "Autor", alias = "autor")]
    #[schema(example = "Gabriel Garcia Marquez")]
    pub autor: String,
    /// Publication year (negative for BC)
    #[serde(rename = "Año", alias = "anio", default)]
    #[schema(example = 1967)]
    pub anio: Option<i32>,
    #[serde(rename = "Precio", alias = "precio", default)]
    #[schema(example = 200000.0)]
    pub precio: Option<f64>,
}

impl Libro {
    pub fn new(titulo: &str, autor: &str, anio: i32, precio: f64) -> Self {
        Self {
            titulo: titulo.to_string(),
            autor: autor.to_string(),
            anio: Some(anio),
            precio: Some(precio),
        }
    }
}

impl Entity for Libro {
    type Key = String;
    const NAME: &'static str = "Libro";

    fn key(&self) -> &String {
        &self.titulo
    }
}
