// SPDX-License-Identifier: MIT

//! Service-principal credential loading from the environment.
//!
//! All environment access for the workspace happens here, once, at startup.
//! The rest of the code receives a [`ClientArgs`] value instead of reading
//! the environment ad hoc.

use std::env::{self, VarError};
use std::fmt;

use crate::error::ConfigError;

pub const AZURE_CLIENT_ID: &str = "AZURE_CLIENT_ID";
pub const AZURE_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
pub const AZURE_TENANT_ID: &str = "AZURE_TENANT_ID";
pub const AZURE_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";

/// Optional SSH public key installed on the cluster's linux profile.
pub const AZURE_SSH_PUBLIC_KEY: &str = "AZURE_SSH_PUBLIC_KEY";

/// Service-principal credential triple for the target cloud account.
#[derive(Clone, PartialEq, Eq)]
pub struct ServicePrincipal {
    pub client_id: String,
    pub secret: String,
    pub tenant: String,
}

// Manual Debug keeps the secret out of logs and error chains.
impl fmt::Debug for ServicePrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServicePrincipal")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("tenant", &self.tenant)
            .finish()
    }
}

/// Credentials/subscription pair handed to a deployer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientArgs {
    pub credentials: ServicePrincipal,
    pub subscription_id: String,
    /// SSH public key for the cluster's admin user, when the caller has one.
    pub ssh_public_key: Option<String>,
}

impl ClientArgs {
    /// Load credentials from the four required environment variables.
    ///
    /// Missing any of them is fatal and immediate; this runs before any
    /// deployer is constructed and before any network call.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            credentials: ServicePrincipal {
                client_id: required(AZURE_CLIENT_ID)?,
                secret: required(AZURE_CLIENT_SECRET)?,
                tenant: required(AZURE_TENANT_ID)?,
            },
            subscription_id: required(AZURE_SUBSCRIPTION_ID)?,
            ssh_public_key: env::var(AZURE_SSH_PUBLIC_KEY).ok().filter(|s| !s.is_empty()),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Err(ConfigError::MissingEnv(name)),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
