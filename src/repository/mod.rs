//! Repository layer: one in-memory collection per resource

pub mod memory;
pub mod seed;

use crate::models::{libro::Libro, prestamo::Prestamo, usuario::Usuario};

pub use memory::{Entity, InMemoryRepository};
pub use seed::SeedData;

pub type UsuariosRepository = InMemoryRepository<Usuario>;
pub type LibrosRepository = InMemoryRepository<Libro>;
pub type PrestamosRepository = InMemoryRepository<Prestamo>;

/// Main repository struct holding the three collections.
///
/// Created once per process; clones share the same data.
#[derive(Clone, Default)]
pub struct Repository {
    pub usuarios: UsuariosRepository,
    pub libros: LibrosRepository,
    pub prestamos: PrestamosRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert seed records through the regular create path. Records whose key
    /// is already present are skipped. Returns the number inserted.
    pub fn seed(&self, data: SeedData) -> usize {
        seed_into(&self.usuarios, data.usuarios)
            + seed_into(&self.libros, data.libros)
            + seed_into(&self.prestamos, data.prestamos)
    }
}

fn seed_into<T: Entity>(repository: &InMemoryRepository<T>, records: Vec<T>) -> usize {
    let mut inserted = 0;
    for record in records {
        let key = record.key().to_string();
        match repository.create(record) {
            Ok(_) => inserted += 1,
            Err(e) => tracing::warn!("Skipping seed {} {}: {}", T::NAME, key, e),
        }
    }
    inserted
}
