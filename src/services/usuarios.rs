//! Patron management service

use crate::{
    error::AppResult,
    models::usuario::Usuario,
    repository::Repository,
};

#[derive(Clone)]
pub struct UsuariosService {
    repository: Repository,
}

impl UsuariosService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> AppResult<Vec<Usuario>> {
        self.repository.usuarios.list(None)
    }

    pub fn get_by_cedula(&self, cedula: i64) -> AppResult<Usuario> {
        tracing::debug!("Looking up usuario {}", cedula);
        self.repository.usuarios.get(&cedula)
    }

    pub fn create(&self, usuario: Usuario) -> AppResult<Usuario> {
        let usuario = self.repository.usuarios.create(usuario)?;
        tracing::info!("Usuario {} created", usuario.cedula);
        Ok(usuario)
    }

    pub fn replace(&self, cedula: i64, usuario: Usuario) -> AppResult<Usuario> {
        let usuario = self.repository.usuarios.replace(&cedula, usuario)?;
        tracing::info!("Usuario {} replaced", cedula);
        Ok(usuario)
    }

    pub fn delete(&self, cedula: i64) -> AppResult<Usuario> {
        let usuario = self.repository.usuarios.delete(&cedula)?;
        tracing::info!("Usuario {} deleted", cedula);
        Ok(usuario)
    }
}
