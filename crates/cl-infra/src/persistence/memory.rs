use std::sync::{PoisonError, RwLock};

use cl_core::ports::{PersistenceError, PersistencePort};
use cl_core::{ConsentState, Diagnosis, Registration};

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    state: RwLock<ConsentState>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ConsentState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&ConsentState) -> T) -> Result<T, PersistenceError> {
        Ok(f(&self.state.read().unwrap_or_else(PoisonError::into_inner)))
    }

    fn write(&self, f: impl FnOnce(&mut ConsentState)) -> Result<(), PersistenceError> {
        f(&mut self.state.write().unwrap_or_else(PoisonError::into_inner));
        Ok(())
    }
}

impl PersistencePort for InMemoryPersistence {
    fn allowed_data_sharing(&self) -> Result<bool, PersistenceError> {
        self.read(|s| s.data_sharing_allowed)
    }

    fn set_allowed_data_sharing(&self, allowed: bool) -> Result<(), PersistenceError> {
        self.write(|s| s.data_sharing_allowed = allowed)
    }

    fn partial_postcode(&self) -> Result<Option<String>, PersistenceError> {
        self.read(|s| s.partial_postcode.clone())
    }

    fn set_partial_postcode(&self, postcode: Option<String>) -> Result<(), PersistenceError> {
        self.write(|s| s.partial_postcode = postcode)
    }

    fn registration(&self) -> Result<Option<Registration>, PersistenceError> {
        self.read(|s| s.registration.clone())
    }

    fn set_registration(&self, registration: Option<Registration>) -> Result<(), PersistenceError> {
        self.write(|s| s.registration = registration)
    }

    fn diagnosis(&self) -> Result<Diagnosis, PersistenceError> {
        self.read(|s| s.diagnosis)
    }

    fn set_diagnosis(&self, diagnosis: Diagnosis) -> Result<(), PersistenceError> {
        self.write(|s| s.diagnosis = diagnosis)
    }

    fn consent_state(&self) -> Result<ConsentState, PersistenceError> {
        self.read(ConsentState::clone)
    }
}
