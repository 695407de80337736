//! Persistence store implementations.

mod file;
mod memory;

pub use file::{FilePersistence, DEFAULT_PERSISTENCE_FILE};
pub use memory::InMemoryPersistence;
