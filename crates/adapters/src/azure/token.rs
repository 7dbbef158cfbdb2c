// SPDX-License-Identifier: MIT

//! OAuth2 client-credentials grant against Azure Active Directory.

use std::sync::Arc;
use std::time::{Duration, Instant};

use caravel_core::ServicePrincipal;
use parking_lot::Mutex;
use serde::Deserialize;

use super::AzureError;

/// Public AAD endpoint. Overridable for tests.
pub const LOGIN_URL: &str = "https://login.microsoftonline.com";

/// Audience the token is requested for.
const MANAGEMENT_RESOURCE: &str = "https://management.azure.com/";

/// Refresh this long before the reported expiry.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    // AAD v1 returns this as a decimal string
    expires_in: Option<String>,
}

struct CachedToken {
    bearer: String,
    acquired: Instant,
    ttl: Duration,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.acquired.elapsed() + EXPIRY_MARGIN < self.ttl
    }
}

/// Acquires and caches bearer tokens for the management API.
#[derive(Clone)]
pub struct TokenProvider {
    http: reqwest::Client,
    login_url: String,
    credentials: ServicePrincipal,
    cached: Arc<Mutex<Option<CachedToken>>>,
}

impl TokenProvider {
    pub fn new(http: reqwest::Client, credentials: ServicePrincipal) -> Self {
        Self {
            http,
            login_url: LOGIN_URL.to_string(),
            credentials,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self.cached = Arc::new(Mutex::new(None));
        self
    }

    /// Current bearer token, fetching a fresh one when the cache is stale.
    pub async fn bearer(&self) -> Result<String, AzureError> {
        if let Some(cached) = self.cached.lock().as_ref() {
            if cached.is_fresh() {
                return Ok(cached.bearer.clone());
            }
        }

        let token = self.fetch().await?;
        let bearer = token.bearer.clone();
        *self.cached.lock() = Some(token);
        Ok(bearer)
    }

    async fn fetch(&self) -> Result<CachedToken, AzureError> {
        let url = format!("{}/{}/oauth2/token", self.login_url, self.credentials.tenant);
        tracing::debug!(tenant = %self.credentials.tenant, "requesting management token");

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.secret.as_str()),
                ("resource", MANAGEMENT_RESOURCE),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AzureError::Token { status: status.as_u16(), body });
        }

        let token: TokenResponse = response.json().await?;
        let ttl = token
            .expires_in
            .as_deref()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(3600));

        Ok(CachedToken { bearer: token.access_token, acquired: Instant::now(), ttl })
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
