//! HTTP client for the storefront REST API.

mod auth;
mod origin;

use std::sync::Arc;
use std::time::Duration;

use lapstore_core::{AppConfig, SessionStore};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::ListingResponse;

pub use origin::normalize_base_url;

/// HTTP client for the storefront API.
///
/// One attempt per call: no retries, no backoff. Non-2xx responses map to
/// typed errors; a 401 on an authenticated request also clears the injected
/// [`SessionStore`].
pub struct StorefrontClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl StorefrontClient {
    /// Creates a client from application config.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `config.backend_url` is not
    /// an http(s) URL, or [`ClientError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(config: &AppConfig, session: Arc<dyn SessionStore>) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.backend_url,
            config.request_timeout_secs,
            &config.user_agent,
            session,
        )
    }

    /// Creates a client against an explicit base URL (wiremock in tests).
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontClient::new`].
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    /// Normalized base URL, no trailing slash. Image paths are resolved
    /// against this.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// `GET /laptops/filter{query}`. `query` is the output of
    /// [`lapstore_core::build_filter_query`], leading `?` included.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] / [`ClientError::UnexpectedStatus`] for non-2xx.
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Deserialize`] if the body is not a listing payload.
    pub async fn fetch_listing(&self, query: &str) -> Result<ListingResponse, ClientError> {
        let url = self.url(&format!("/laptops/filter{query}"));
        let request = self.client.get(&url);
        self.send_json(request, url, "laptop listing", false).await
    }

    /// `GET /laptops/search{query}`. `query` is the output of
    /// [`lapstore_core::build_search_query`].
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontClient::fetch_listing`].
    pub async fn search(&self, query: &str) -> Result<ListingResponse, ClientError> {
        let url = self.url(&format!("/laptops/search{query}"));
        let request = self.client.get(&url);
        self.send_json(request, url, "laptop search", false).await
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }

    /// Attaches the session's bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotAuthenticated`] without sending anything when
    /// the session has no token.
    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.session.token().ok_or(ClientError::NotAuthenticated)?;
        Ok(request.bearer_auth(token))
    }

    /// Sends `request` and decodes a 2xx JSON body as `T`.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: String,
        context: &str,
        authenticated: bool,
    ) -> Result<T, ClientError> {
        let host = origin::extract_host(&url);
        tracing::debug!(%host, %url, context, "storefront request");

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED && authenticated {
            tracing::warn!(%host, context, "token rejected; clearing session");
            self.session.clear();
            return Err(ClientError::Unauthorized { url });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { url });
        }

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ClientError::Deserialize {
            context: format!("{context} from {url}"),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
