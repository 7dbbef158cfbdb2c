// SPDX-License-Identifier: MIT

//! Thin client for the Azure Resource Manager REST API.
//!
//! Covers exactly what the two deployers need: bearer-token acquisition,
//! resource-group upserts, template deployments with provisioning polls,
//! container-service lookups, and registry creation/credentials.

mod arm;
pub mod templates;
mod token;

pub use arm::{ContainerServiceFqdns, RegistryCredentials};
pub use token::TokenProvider;

use std::time::Duration;

use caravel_core::ClientArgs;
use thiserror::Error;

/// Public management endpoint. Overridable for tests.
pub const MANAGEMENT_URL: &str = "https://management.azure.com";

/// Default interval between provisioning-state polls.
const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Errors from the ARM client or token acquisition.
#[derive(Debug, Error)]
pub enum AzureError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Azure API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Token endpoint returned {status}: {body}")]
    Token { status: u16, body: String },

    #[error("Deployment {name} ended in state {state}")]
    DeploymentFailed { name: String, state: String },

    #[error("Response missing expected field: {0}")]
    MissingField(&'static str),
}

/// Authenticated client scoped to one subscription.
#[derive(Clone)]
pub struct AzureClient {
    http: reqwest::Client,
    management_url: String,
    token: TokenProvider,
    subscription_id: String,
    poll_interval: Duration,
}

impl AzureClient {
    pub fn new(args: &ClientArgs) -> Self {
        let http = reqwest::Client::new();
        Self {
            token: TokenProvider::new(http.clone(), args.credentials.clone()),
            http,
            management_url: MANAGEMENT_URL.to_string(),
            subscription_id: args.subscription_id.clone(),
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Point the client at a different management endpoint (tests).
    pub fn with_management_url(mut self, url: impl Into<String>) -> Self {
        self.management_url = url.into();
        self
    }

    /// Point token acquisition at a different login endpoint (tests).
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.token = self.token.with_login_url(url);
        self
    }

    /// Shorten the provisioning poll interval (tests).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }
}
