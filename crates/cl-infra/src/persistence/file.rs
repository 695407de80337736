//! File-based persistence store
//!
//! Keeps the consent state in memory and writes the whole document through to
//! a JSON file on every change. Writes go to a sibling temp file first and are
//! renamed into place so a crash never leaves a half-written document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use tracing::{debug, warn};

use cl_core::ports::{PersistenceError, PersistencePort};
use cl_core::{ConsentState, Diagnosis, Registration};

pub const DEFAULT_PERSISTENCE_FILE: &str = "persistence.json";

pub struct FilePersistence {
    path: PathBuf,
    state: RwLock<ConsentState>,
}

impl FilePersistence {
    /// Open the store at `path`, loading existing state if the file exists.
    ///
    /// A missing or empty file is a fresh install. Unparseable content is an
    /// error rather than silently starting over.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let state = load(&path)?;
        debug!(path = %path.display(), "persistence store opened");
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Open the store under `base_dir` with the default file name.
    pub fn with_defaults(base_dir: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        Self::open(base_dir.as_ref().join(DEFAULT_PERSISTENCE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Forget everything (for testing or re-onboarding).
    pub fn reset(&self) -> Result<(), PersistenceError> {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(storage_error)?;
        }
        *guard = ConsentState::default();
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&ConsentState) -> T) -> Result<T, PersistenceError> {
        Ok(f(&self.state.read().unwrap_or_else(PoisonError::into_inner)))
    }

    /// Apply `f` and persist. The in-memory copy only changes if the write lands.
    fn update(&self, f: impl FnOnce(&mut ConsentState)) -> Result<(), PersistenceError> {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = guard.clone();
        f(&mut next);
        if next == *guard {
            return Ok(());
        }
        store(&self.path, &next)?;
        *guard = next;
        Ok(())
    }
}

fn storage_error(err: std::io::Error) -> PersistenceError {
    PersistenceError::Storage(err.to_string())
}

fn load(path: &Path) -> Result<ConsentState, PersistenceError> {
    if !path.exists() {
        return Ok(ConsentState::default());
    }

    let content = fs::read_to_string(path).map_err(storage_error)?;
    if content.trim().is_empty() {
        warn!(path = %path.display(), "persistence file is empty; starting fresh");
        return Ok(ConsentState::default());
    }

    serde_json::from_str(&content)
        .map_err(|e| PersistenceError::Corrupt(format!("Failed to parse persistence file: {}", e)))
}

fn store(path: &Path, state: &ConsentState) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(storage_error)?;
    }

    let json = serde_json::to_string_pretty(state)
        .map_err(|e| PersistenceError::Storage(format!("Failed to serialize state: {}", e)))?;

    let tmp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp_path).map_err(storage_error)?;
    file.write_all(json.as_bytes()).map_err(storage_error)?;
    file.sync_all().map_err(storage_error)?;
    fs::rename(&tmp_path, path).map_err(storage_error)?;

    debug!(path = %path.display(), "persistence file written");
    Ok(())
}

impl PersistencePort for FilePersistence {
    fn allowed_data_sharing(&self) -> Result<bool, PersistenceError> {
        self.read(|s| s.data_sharing_allowed)
    }

    fn set_allowed_data_sharing(&self, allowed: bool) -> Result<(), PersistenceError> {
        self.update(|s| s.data_sharing_allowed = allowed)
    }

    fn partial_postcode(&self) -> Result<Option<String>, PersistenceError> {
        self.read(|s| s.partial_postcode.clone())
    }

    fn set_partial_postcode(&self, postcode: Option<String>) -> Result<(), PersistenceError> {
        self.update(|s| s.partial_postcode = postcode)
    }

    fn registration(&self) -> Result<Option<Registration>, PersistenceError> {
        self.read(|s| s.registration.clone())
    }

    fn set_registration(&self, registration: Option<Registration>) -> Result<(), PersistenceError> {
        self.update(|s| s.registration = registration)
    }

    fn diagnosis(&self) -> Result<Diagnosis, PersistenceError> {
        self.read(|s| s.diagnosis)
    }

    fn set_diagnosis(&self, diagnosis: Diagnosis) -> Result<(), PersistenceError> {
        self.update(|s| s.diagnosis = diagnosis)
    }

    fn consent_state(&self) -> Result<ConsentState, PersistenceError> {
        self.read(ConsentState::clone)
    }
}
