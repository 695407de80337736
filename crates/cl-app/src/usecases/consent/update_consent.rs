use std::sync::Arc;

use tracing::info;

use cl_core::ports::{PersistenceError, PersistencePort};
use cl_core::Registration;

/// Longest outward code of a UK postcode.
const MAX_PARTIAL_POSTCODE_LEN: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum ConsentError {
    #[error("partial postcode is empty")]
    EmptyPostcode,
    #[error("partial postcode must be at most {max} letters or digits, got {0:?}", max = MAX_PARTIAL_POSTCODE_LEN)]
    InvalidPostcode(String),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Use case for recording the user's onboarding answers.
pub struct UpdateConsent {
    persistence: Arc<dyn PersistencePort>,
}

impl UpdateConsent {
    pub fn new(persistence: Arc<dyn PersistencePort>) -> Self {
        Self { persistence }
    }

    pub fn set_data_sharing(&self, allowed: bool) -> Result<(), ConsentError> {
        self.persistence.set_allowed_data_sharing(allowed)?;
        info!(allowed, "data sharing consent updated");
        Ok(())
    }

    /// Normalize and store the partial postcode. Returns the stored value.
    pub fn submit_partial_postcode(&self, raw: &str) -> Result<String, ConsentError> {
        let postcode = raw.trim().to_ascii_uppercase();
        if postcode.is_empty() {
            return Err(ConsentError::EmptyPostcode);
        }
        if postcode.len() > MAX_PARTIAL_POSTCODE_LEN
            || !postcode.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConsentError::InvalidPostcode(postcode));
        }

        self.persistence.set_partial_postcode(Some(postcode.clone()))?;
        info!("partial postcode stored");
        Ok(postcode)
    }

    pub fn store_registration(&self, registration: Registration) -> Result<(), ConsentError> {
        let id = registration.id;
        self.persistence.set_registration(Some(registration))?;
        info!(%id, "device registration stored");
        Ok(())
    }
}
