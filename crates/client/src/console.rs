//! The console context: one owned object wiring the API client, the
//! session store, and the resource stores together.
//!
//! There is no ambient global session. Construct a [`Console`] explicitly
//! (hydrating any persisted session from the vault), pass it to whatever
//! needs it, and drop it to tear everything down.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::VaultError;
use crate::models::{LoginCredentials, RegisterCredentials};
use crate::store::{BranchStore, InvestorStore, SalesStore, SessionStore};
use crate::vault::{FileVault, SessionVault};

/// Owned context for one console session.
#[derive(Clone)]
pub struct Console {
    api: ApiClient,
    pub session: SessionStore,
    pub branches: BranchStore,
    pub investors: InvestorStore,
    pub sales: SalesStore,
}

impl Console {
    /// Connect using a file-backed session vault from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if a persisted session exists but cannot be
    /// read.
    pub fn connect(config: &ClientConfig) -> Result<Self, VaultError> {
        let api = ApiClient::new(config.api_url.clone());
        let vault: Arc<dyn SessionVault> = Arc::new(FileVault::new(config.session_file.clone()));
        Self::with_parts(api, vault)
    }

    /// Wire a console from explicit parts. Used by tests to inject an
    /// in-memory vault.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the vault cannot be read.
    pub fn with_parts(api: ApiClient, vault: Arc<dyn SessionVault>) -> Result<Self, VaultError> {
        let session = SessionStore::open(Arc::new(api.clone()), vault)?;
        if let Some(user) = session.current_user() {
            api.set_bearer(Some(&user.token));
        }

        let data: Arc<ApiClient> = Arc::new(api.clone());
        Ok(Self {
            branches: BranchStore::new(data.clone()),
            investors: InvestorStore::new(data.clone()),
            sales: SalesStore::new(data),
            session,
            api,
        })
    }

    /// Authenticate and attach the returned token to subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message recorded on the session store.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), String> {
        self.session.login(credentials).await?;
        self.refresh_bearer();
        Ok(())
    }

    /// Authenticate against the admin entry point.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`].
    pub async fn admin_login(&self, credentials: &LoginCredentials) -> Result<(), String> {
        self.session.admin_login(credentials).await?;
        self.refresh_bearer();
        Ok(())
    }

    /// Register a new account and sign in.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`].
    pub async fn register(&self, credentials: &RegisterCredentials) -> Result<(), String> {
        self.session.register(credentials).await?;
        self.refresh_bearer();
        Ok(())
    }

    /// Clear the session and detach the bearer token. Navigation, if any,
    /// is the caller's decision.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the persisted session cannot be removed.
    pub fn logout(&self) -> Result<(), VaultError> {
        let result = self.session.logout();
        self.api.set_bearer(None);
        result
    }

    /// The underlying API client, for calls outside the store lifecycle
    /// (password reset, profile updates).
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    fn refresh_bearer(&self) {
        if let Some(user) = self.session.current_user() {
            self.api.set_bearer(Some(&user.token));
        }
    }
}
