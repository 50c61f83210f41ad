//! Persisted session storage.
//!
//! One fixed slot holding the serialized session identity, read once at
//! start-up and written or cleared only by session actions.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::VaultError;
use crate::models::SessionUser;

/// Persistent storage for the session identity.
pub trait SessionVault: Send + Sync {
    /// Read the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the slot exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Option<SessionUser>, VaultError>;

    /// Persist the session, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] on a write failure.
    fn store(&self, user: &SessionUser) -> Result<(), VaultError>;

    /// Remove the persisted session.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] on a removal failure.
    fn clear(&self) -> Result<(), VaultError>;
}

/// File-backed vault holding the session as a JSON document.
#[derive(Debug, Clone)]
pub struct FileVault {
    path: PathBuf,
}

impl FileVault {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionVault for FileVault {
    fn load(&self) -> Result<Option<SessionUser>, VaultError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, user: &SessionUser) -> Result<(), VaultError> {
        let contents = serde_json::to_string(user)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), VaultError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory vault for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryVault {
    slot: Mutex<Option<SessionUser>>,
}

impl MemoryVault {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionVault for MemoryVault {
    fn load(&self) -> Result<Option<SessionUser>, VaultError> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn store(&self, user: &SessionUser) -> Result<(), VaultError> {
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), VaultError> {
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}
