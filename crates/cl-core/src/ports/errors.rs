use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("persisted data corrupt: {0}")]
    Corrupt(String),
}
