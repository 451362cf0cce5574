//! Login, profile and admin endpoints for `StorefrontClient`.

use lapstore_core::UserProfile;

use crate::error::ClientError;
use crate::types::{ErrorDetail, LoginResponse, OrderRecord, OrdersPayload};

use super::StorefrontClient;

impl StorefrontClient {
    /// Logs in with email and password, stores the token in the session and
    /// caches the account profile.
    ///
    /// # Errors
    ///
    /// - [`ClientError::LoginRejected`] on 400/401/403, carrying the server's
    ///   `detail` message when present.
    /// - Any error from [`StorefrontClient::fetch_profile`].
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ClientError> {
        let url = self.url("/accounts/login");
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let status = response.status();

        if matches!(status.as_u16(), 400 | 401 | 403) {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorDetail>(&body)
                .map_or_else(|_| "Login failed".to_string(), |e| e.detail);
            return Err(ClientError::LoginRejected { detail });
        }
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let login: LoginResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: "login response".to_string(),
                source: e,
            })?;
        self.session.set_token(login.access_token);

        let profile = self.fetch_profile().await?;
        self.session.set_profile(profile.clone());
        tracing::info!(user_id = profile.id, "logged in");
        Ok(profile)
    }

    /// Drops the session token and cached profile. No request is made.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// `GET /accounts/profile`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotAuthenticated`] if the session holds no token.
    /// - [`ClientError::Unauthorized`] on 401 (session cleared).
    /// - Other transport/status/decode errors as for listing calls.
    pub async fn fetch_profile(&self) -> Result<UserProfile, ClientError> {
        let url = self.url("/accounts/profile");
        let request = self.authorize(self.client.get(&url))?;
        self.send_json(request, url, "account profile", true).await
    }

    /// `GET /orders/admin/list/all`: every order, unpaginated. Admin only.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontClient::fetch_profile`].
    pub async fn list_all_orders(&self) -> Result<Vec<OrderRecord>, ClientError> {
        let url = self.url("/orders/admin/list/all");
        let request = self.authorize(self.client.get(&url))?;
        let payload: OrdersPayload = self
            .send_json(request, url, "admin order list", true)
            .await?;
        Ok(payload.into_orders())
    }
}
