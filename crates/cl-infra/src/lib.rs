pub mod persistence;

pub use persistence::{FilePersistence, InMemoryPersistence};
