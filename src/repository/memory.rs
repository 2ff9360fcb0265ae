//! Generic in-memory collection used for every resource
//!
//! Entries are kept in insertion order and looked up by linear scan on their
//! key. Each compound operation runs under a single write lock, so two
//! concurrent creates with the same key can never both succeed.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;

use crate::error::{AppError, AppResult};

/// A record stored in an [`InMemoryRepository`]
pub trait Entity: Clone + Send + Sync + 'static {
    /// Business identifier, unique among live entries
    type Key: PartialEq + fmt::Display + Send + Sync;

    /// Singular name used in response messages
    const NAME: &'static str;

    fn key(&self) -> &Self::Key;

    /// Field matched by list filters. Entities without one never match a filter.
    fn filter_value(&self) -> Option<&str> {
        None
    }
}

/// Ordered collection of entities of one type, shared between clones
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    entries: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy of all entries in collection order
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.read().clone()
    }

    /// List entries, optionally keeping only those whose filter field equals
    /// `filter` ignoring case. An empty result is reported as `NotFound`.
    pub fn list(&self, filter: Option<&str>) -> AppResult<Vec<T>> {
        let entries = self.entries.read();

        let Some(wanted) = filter else {
            if entries.is_empty() {
                return Err(AppError::NotFound(format!(
                    "No hay registros de {}.",
                    T::NAME
                )));
            }
            return Ok(entries.clone());
        };

        let needle = wanted.to_lowercase();
        let matching: Vec<T> = entries
            .iter()
            .filter(|entry| {
                entry
                    .filter_value()
                    .is_some_and(|value| value.to_lowercase() == needle)
            })
            .cloned()
            .collect();

        if matching.is_empty() {
            return Err(AppError::NotFound(format!(
                "No se encontraron registros de {} con el valor '{}'.",
                T::NAME,
                wanted
            )));
        }
        Ok(matching)
    }

    /// First entry whose key equals `key`
    pub fn get(&self, key: &T::Key) -> AppResult<T> {
        self.entries
            .read()
            .iter()
            .find(|entry| entry.key() == key)
            .cloned()
            .ok_or_else(not_found::<T>)
    }

    /// Append `entity` unless its key is already taken
    pub fn create(&self, entity: T) -> AppResult<T> {
        let mut entries = self.entries.write();
        if entries.iter().any(|entry| entry.key() == entity.key()) {
            return Err(AppError::Conflict(format!(
                "{} ya existe en el registro.",
                T::NAME
            )));
        }
        entries.push(entity.clone());
        Ok(entity)
    }

    /// Overwrite the entry stored under `key`, keeping its position.
    ///
    /// The replacement may carry a new key, as long as no other entry owns it.
    pub fn replace(&self, key: &T::Key, entity: T) -> AppResult<T> {
        let mut entries = self.entries.write();
        let index = entries
            .iter()
            .position(|entry| entry.key() == key)
            .ok_or_else(not_found::<T>)?;

        let taken = entries
            .iter()
            .enumerate()
            .any(|(i, entry)| i != index && entry.key() == entity.key());
        if taken {
            return Err(AppError::Conflict(format!(
                "{} {} ya existe en el registro.",
                T::NAME,
                entity.key()
            )));
        }

        entries[index] = entity.clone();
        Ok(entity)
    }

    /// Remove and return the entry stored under `key`
    pub fn delete(&self, key: &T::Key) -> AppResult<T> {
        let mut entries = self.entries.write();
        let index = entries
            .iter()
            .position(|entry| entry.key() == key)
            .ok_or_else(not_found::<T>)?;
        Ok(entries.remove(index))
    }
}

fn not_found<T: Entity>() -> AppError {
    AppError::NotFound(format!("{} no encontrado.", T::NAME))
}
