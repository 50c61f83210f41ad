//! Typed client for the remote console REST API.
//!
//! The stores depend on the [`AuthApi`] and [`DataApi`] traits rather than
//! the concrete [`ApiClient`], so tests can inject fakes without standing up
//! an HTTP server.

mod auth;
mod data;

pub use data::{InvestorQuery, SalesQuery};

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use ledgerline_core::{Page, PageLimit};

use crate::error::ApiError;
use crate::models::{
    Branch, CreatedSale, Investor, LoginCredentials, NewBranch, NewInvestor, NewSale,
    RegisterCredentials, Sale, SessionUser,
};

/// Authentication endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<SessionUser, ApiError>;
    async fn admin_login(&self, credentials: &LoginCredentials) -> Result<SessionUser, ApiError>;
    async fn register(&self, credentials: &RegisterCredentials) -> Result<SessionUser, ApiError>;
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;
    async fn reset_password(&self, token: &str, password: &SecretString) -> Result<(), ApiError>;
    async fn change_password(
        &self,
        current: &SecretString,
        new: &SecretString,
    ) -> Result<(), ApiError>;
    async fn update_profile(&self, name: &str, email: &str) -> Result<(), ApiError>;
}

/// Branch, investor, and sale endpoints.
#[async_trait]
pub trait DataApi: Send + Sync {
    async fn branches(&self, limit: Option<PageLimit>) -> Result<Vec<Branch>, ApiError>;
    async fn create_branch(&self, payload: &NewBranch) -> Result<Branch, ApiError>;
    async fn investors(&self, query: &InvestorQuery) -> Result<Page<Investor>, ApiError>;
    async fn create_investor(&self, payload: &NewInvestor) -> Result<Investor, ApiError>;
    async fn sales(&self, query: &SalesQuery) -> Result<Page<Sale>, ApiError>;
    async fn create_sale(&self, payload: &NewSale) -> Result<CreatedSale, ApiError>;
}

/// Error envelope the remote API uses for non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the remote console API.
///
/// Cheap to clone; clones share the underlying connection pool and the
/// bearer token slot, so a token set after login is visible to every clone.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    bearer: RwLock<Option<SecretString>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("bearer", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client for the given API base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url,
                bearer: RwLock::new(None),
            }),
        }
    }

    /// Set or clear the bearer token attached to subsequent requests.
    pub fn set_bearer(&self, token: Option<&str>) {
        let mut slot = self
            .inner
            .bearer
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = token.map(SecretString::from);
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Transport("API base URL cannot hold a path".to_owned()))?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let bearer = self
            .inner
            .bearer
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match bearer.as_ref() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    #[instrument(skip(self, query), fields(path = %path))]
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(self.inner.client.get(self.endpoint(path)?))
            .query(query);
        let response = request.send().await.map_err(ApiError::from)?;
        Self::decode(response).await
    }

    #[instrument(skip(self, body), fields(path = %path))]
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(self.inner.client.post(self.endpoint(path)?))
            .json(body);
        let response = request.send().await.map_err(ApiError::from)?;
        Self::decode(response).await
    }

    #[instrument(skip(self, body), fields(path = %path))]
    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(self.inner.client.put(self.endpoint(path)?))
            .json(body);
        let response = request.send().await.map_err(ApiError::from)?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            // The error envelope is best-effort: any body that is not the
            // expected `{ message }` shape collapses to the fallback later.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            debug!(%status, ?message, "api request rejected");
            return Err(ApiError::Rejected { status, message });
        }

        debug!(%status, "api response received");
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let client = ApiClient::new(Url::parse("http://localhost:5000/api").expect("url"));
        let url = client.endpoint("auth/login").expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:5000/api/auth/login");
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let client = ApiClient::new(Url::parse("http://localhost:5000/api/").expect("url"));
        let url = client.endpoint("sales").expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:5000/api/sales");
    }
}
