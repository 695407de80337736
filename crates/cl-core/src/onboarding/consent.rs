use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::diagnosis::Diagnosis;

/// Credentials handed out by the registration service.
///
/// The onboarding flow only cares whether one is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub secret_key: Vec<u8>,
}

impl Registration {
    pub fn new(id: Uuid, secret_key: Vec<u8>) -> Self {
        Self { id, secret_key }
    }
}

/// Persisted consent and registration facts.
///
/// Owned by the persistence store; read-only to the onboarding flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentState {
    pub data_sharing_allowed: bool,
    pub partial_postcode: Option<String>,
    pub registration: Option<Registration>,
    pub diagnosis: Diagnosis,
}

impl ConsentState {
    pub fn is_registered(&self) -> bool {
        self.registration.is_some()
    }
}
