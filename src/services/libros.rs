//! Catalog service

use crate::{
    error::AppResult,
    models::libro::Libro,
    repository::Repository,
};

#[derive(Clone)]
pub struct LibrosService {
    repository: Repository,
}

impl LibrosService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> AppResult<Vec<Libro>> {
        self.repository.libros.list(None)
    }

    /// Get a book by exact title
    pub fn get_by_titulo(&self, titulo: &str) -> AppResult<Libro> {
        tracing::debug!("Looking up libro '{}'", titulo);
        self.repository.libros.get(&titulo.to_string())
    }

    pub fn create(&self, libro: Libro) -> AppResult<Libro> {
        let libro = self.repository.libros.create(libro)?;
        tracing::info!("Libro '{}' created", libro.titulo);
        Ok(libro)
    }

    pub fn replace(&self, titulo: &str, libro: Libro) -> AppResult<Libro> {
        let libro = self.repository.libros.replace(&titulo.to_string(), libro)?;
        tracing::info!("Libro '{}' replaced", titulo);
        Ok(libro)
    }

    pub fn delete(&self, titulo: &str) -> AppResult<Libro> {
        let libro = self.repository.libros.delete(&titulo.to_string())?;
        tracing::info!("Libro '{}' deleted", titulo);
        Ok(libro)
    }
}
