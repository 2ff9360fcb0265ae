//! Startup data: the demo catalogue and JSON seed files

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{libro::Libro, prestamo::Prestamo, usuario::Usuario},
};

/// Records loaded into the repository at startup
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub usuarios: Vec<Usuario>,
    #[serde(default)]
    pub libros: Vec<Libro>,
    #[serde(default)]
    pub prestamos: Vec<Prestamo>,
}

impl SeedData {
    /// Demo catalogue served out of the box
    pub fn demo() -> Self {
        Self {
            libros: vec![
                Libro::new("Las cronicas de Dayron Moreno", "Santiago Hernandez", 2000, 5000.0),
                Libro::new("1984", "George Orwell", 1949, 25000.0),
                Libro::new("Don Quijote de la Mancha", "Miguel de Cervantes", 1605, 40000.0),
                Libro::new("La Odisea", "Homero", -800, 45000.0),
            ],
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::BadRequest(format!("Invalid seed data: {}", e)))
    }

    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::Internal(format!("Cannot read seed file {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.usuarios.len() + self.libros.len() + self.prestamos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalogue() {
        let demo = SeedData::demo();
        assert_eq!(demo.libros.len(), 4);
        assert!(demo.usuarios.is_empty());
        assert_eq!(demo.libros[3].anio, Some(-800));
    }

    #[test]
    fn test_partial_seed_file() {
        let seed = SeedData::from_json(
            r#"{"libros": [{"Titulo": "Ficciones", "Autor": "Jorge Luis Borges"}]}"#,
        )
        .unwrap();

        assert_eq!(seed.len(), 1);
        assert_eq!(seed.libros[0].titulo, "Ficciones");
        assert!(seed.libros[0].precio.is_none());
    }

    #[test]
    fn test_example_seed_file() {
        let seed = SeedData::from_json(include_str!("../../config/seed.example.json")).unwrap();
        assert_eq!(seed.usuarios.len(), 2);
        assert_eq!(seed.prestamos[1].estado_prestamo, "Devuelto");
        assert!(seed.prestamos[1].fecha_devolucion.is_some());
    }

    #[test]
    fn test_malformed_seed() {
        assert!(matches!(
            SeedData::from_json("{\"usuarios\": 3}"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_missing_seed_file() {
        assert!(matches!(
            SeedData::from_file("/nonexistent/seed.json"),
            Err(AppError::Internal(_))
        ));
    }
}
