//! Loan management service

use crate::{
    error::AppResult,
    models::prestamo::{Prestamo, PrestamoQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct PrestamosService {
    repository: Repository,
}

impl PrestamosService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List loans, optionally only those with the requested status
    pub fn list(&self, query: &PrestamoQuery) -> AppResult<Vec<Prestamo>> {
        self.repository
            .prestamos
            .list(query.estado_prestamo.as_deref())
    }

    pub fn get_by_id(&self, id: i64) -> AppResult<Prestamo> {
        tracing::debug!("Looking up prestamo {}", id);
        self.repository.prestamos.get(&id)
    }

    /// Register a loan. The referenced usuario and libro are not checked.
    pub fn create(&self, prestamo: Prestamo) -> AppResult<Prestamo> {
        let prestamo = self.repository.prestamos.create(prestamo)?;
        tracing::info!(
            "Prestamo {} created (usuario {}, libro {})",
            prestamo.id_prestamo,
            prestamo.cedula_usuario,
            prestamo.id_libro
        );
        Ok(prestamo)
    }

    pub fn replace(&self, id: i64, prestamo: Prestamo) -> AppResult<Prestamo> {
        let prestamo = self.repository.prestamos.replace(&id, prestamo)?;
        tracing::info!("Prestamo {} replaced, estado {}", id, prestamo.estado_prestamo);
        Ok(prestamo)
    }

    pub fn delete(&self, id: i64) -> AppResult<Prestamo> {
        let prestamo = self.repository.prestamos.delete(&id)?;
        tracing::info!("Prestamo {} deleted", id);
        Ok(prestamo)
    }
}
