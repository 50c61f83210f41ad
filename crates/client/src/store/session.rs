//! Session store: the authenticated identity and its lifecycle.
//!
//! The store hydrates from the session vault exactly once, at construction,
//! and is the only component that writes to or clears the vault. Logout is a
//! pure state transition; navigation is the caller's decision after
//! observing the cleared state.

use std::sync::{Arc, Mutex};

use tracing::{error, instrument, warn};

use super::lock;
use crate::api::AuthApi;
use crate::error::{ApiError, VaultError};
use crate::models::{LoginCredentials, RegisterCredentials, SessionUser};
use crate::vault::SessionVault;

const LOGIN_FALLBACK: &str = "Failed to login";
const ADMIN_LOGIN_FALLBACK: &str = "Failed to login as admin";
const REGISTER_FALLBACK: &str = "Failed to register";

#[derive(Debug)]
struct SessionState {
    user: Option<SessionUser>,
    loading: bool,
    error: Option<String>,
}

/// A point-in-time copy of the session store's state.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub user: Option<SessionUser>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Store for the authenticated session.
#[derive(Clone)]
pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    vault: Arc<dyn SessionVault>,
    state: Arc<Mutex<SessionState>>,
}

impl SessionStore {
    /// Open the session store, hydrating any persisted identity from the
    /// vault.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the vault exists but cannot be read.
    pub fn open(api: Arc<dyn AuthApi>, vault: Arc<dyn SessionVault>) -> Result<Self, VaultError> {
        let user = vault.load()?;
        Ok(Self {
            api,
            vault,
            state: Arc::new(Mutex::new(SessionState {
                user,
                loading: false,
                error: None,
            })),
        })
    }

    /// A point-in-time copy of the store state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = lock(&self.state);
        SessionSnapshot {
            user: state.user.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    /// The current identity, if authenticated.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        lock(&self.state).user.clone()
    }

    pub fn clear_error(&self) {
        lock(&self.state).error = None;
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message, which is also recorded on the store.
    /// The prior identity, if any, is left untouched.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), String> {
        self.begin();
        let result = self.api.login(credentials).await;
        self.settle(result, LOGIN_FALLBACK)
    }

    /// Authenticate against the admin entry point.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`].
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn admin_login(&self, credentials: &LoginCredentials) -> Result<(), String> {
        self.begin();
        let result = self.api.admin_login(credentials).await;
        self.settle(result, ADMIN_LOGIN_FALLBACK)
    }

    /// Register a new account; a successful registration signs in.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`].
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn register(&self, credentials: &RegisterCredentials) -> Result<(), String> {
        self.begin();
        let result = self.api.register(credentials).await;
        self.settle(result, REGISTER_FALLBACK)
    }

    /// Clear the identity and the persisted session. No network call, no
    /// navigation side effect.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the persisted session cannot be removed;
    /// the in-memory identity is cleared regardless.
    pub fn logout(&self) -> Result<(), VaultError> {
        {
            let mut state = lock(&self.state);
            state.user = None;
            state.error = None;
        }
        self.vault.clear()
    }

    fn begin(&self) {
        let mut state = lock(&self.state);
        state.loading = true;
        state.error = None;
    }

    fn settle(&self, result: Result<SessionUser, ApiError>, fallback: &str) -> Result<(), String> {
        match result {
            Ok(user) => {
                // Persist before publishing, overwriting any prior session.
                // A vault write failure degrades to an unpersisted session
                // rather than a failed login.
                if let Err(err) = self.vault.store(&user) {
                    warn!(%err, "failed to persist session");
                }
                let mut state = lock(&self.state);
                state.user = Some(user);
                state.loading = false;
                state.error = None;
                Ok(())
            }
            Err(err) => {
                error!(%err, "authentication failed");
                let message = err.surface_message(fallback);
                let mut state = lock(&self.state);
                state.loading = false;
                state.error = Some(message.clone());
                Err(message)
            }
        }
    }
}
