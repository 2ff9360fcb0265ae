//! Data models for the biblioteca

pub mod libro;
pub mod prestamo;
pub mod usuario;

// Re-export commonly used types
pub use libro::Libro;
pub use prestamo::{Prestamo, PrestamoQuery};
pub use usuario::Usuario;
