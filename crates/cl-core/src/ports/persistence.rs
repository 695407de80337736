//! Persistence port
//!
//! Typed accessors over the app's key-value store. Implementations are
//! provided by the infrastructure layer (e.g., file-based storage).

use crate::diagnosis::Diagnosis;
use crate::onboarding::{ConsentState, Registration};
use crate::ports::errors::PersistenceError;

pub trait PersistencePort: Send + Sync {
    fn allowed_data_sharing(&self) -> Result<bool, PersistenceError>;
    fn set_allowed_data_sharing(&self, allowed: bool) -> Result<(), PersistenceError>;

    fn partial_postcode(&self) -> Result<Option<String>, PersistenceError>;
    fn set_partial_postcode(&self, postcode: Option<String>) -> Result<(), PersistenceError>;

    fn registration(&self) -> Result<Option<Registration>, PersistenceError>;
    /// Written by the registration flow once the service has issued credentials.
    fn set_registration(&self, registration: Option<Registration>) -> Result<(), PersistenceError>;

    fn diagnosis(&self) -> Result<Diagnosis, PersistenceError>;
    fn set_diagnosis(&self, diagnosis: Diagnosis) -> Result<(), PersistenceError>;

    /// Read every onboarding-relevant fact in one go.
    ///
    /// The default reads field by field; stores that can do better should.
    fn consent_state(&self) -> Result<ConsentState, PersistenceError> {
        Ok(ConsentState {
            data_sharing_allowed: self.allowed_data_sharing()?,
            partial_postcode: self.partial_postcode()?,
            registration: self.registration()?,
            diagnosis: self.diagnosis()?,
        })
    }
}

#[cfg(test)]
mockall::mock! {
    pub Persistence {}

    impl PersistencePort for Persistence {
        fn allowed_data_sharing(&self) -> Result<bool, PersistenceError>;
        fn set_allowed_data_sharing(&self, allowed: bool) -> Result<(), PersistenceError>;
        fn partial_postcode(&self) -> Result<Option<String>, PersistenceError>;
        fn set_partial_postcode(&self, postcode: Option<String>) -> Result<(), PersistenceError>;
        fn registration(&self) -> Result<Option<Registration>, PersistenceError>;
        fn set_registration(&self, registration: Option<Registration>) -> Result<(), PersistenceError>;
        fn diagnosis(&self) -> Result<Diagnosis, PersistenceError>;
        fn set_diagnosis(&self, diagnosis: Diagnosis) -> Result<(), PersistenceError>;
    }
}
