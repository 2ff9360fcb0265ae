//! Business logic services

pub mod libros;
pub mod prestamos;
pub mod usuarios;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub usuarios: usuarios::UsuariosService,
    pub libros: libros::LibrosService,
    pub prestamos: prestamos::PrestamosService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            usuarios: usuarios::UsuariosService::new(repository.clone()),
            libros: libros::LibrosService::new(repository.clone()),
            prestamos: prestamos::PrestamosService::new(repository),
        }
    }
}
