// SPDX-License-Identifier: MIT

//! Deployment configuration and resource-name templating

use std::fmt;

use serde::{Deserialize, Serialize};

/// Docker image deployed when `--image` is not given.
pub const DEFAULT_IMAGE: &str = "mesosphere/simple-docker";

/// Short name used in resource-name templates when `-n/--name` is not given.
pub const DEFAULT_NAME: &str = "containersample";

/// Default resource-group template. `{name}` is substituted at resolve time.
pub const DEFAULT_RESOURCE_GROUP: &str = "{name}-group";

/// Which deployer variant handles this run.
///
/// Selected once at startup by `--use-acr`; `Direct` deploys the public image
/// reference as-is, `Registry` stages it through an Azure Container Registry
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeployMode {
    #[default]
    Direct,
    Registry,
}

impl DeployMode {
    pub fn from_flag(use_acr: bool) -> Self {
        if use_acr {
            DeployMode::Registry
        } else {
            DeployMode::Direct
        }
    }

    pub fn is_registry(&self) -> bool {
        matches!(self, DeployMode::Registry)
    }
}

impl fmt::Display for DeployMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployMode::Direct => write!(f, "direct"),
            DeployMode::Registry => write!(f, "registry"),
        }
    }
}

/// Resolved per-invocation deployment configuration.
///
/// Constructed once from the command line, immutable thereafter, and passed
/// by value into the selected deployer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Docker image reference to deploy.
    pub image: String,
    /// Resource group holding every resource this run creates.
    pub resource_group: String,
    /// Name of the ACS container-service resource.
    pub container_service: String,
    /// Name of the storage account backing the cluster.
    pub storage_account: String,
    /// Name of the container registry (only created in registry mode).
    pub container_registry: String,
}

impl DeployConfig {
    /// Resolve the configuration from the raw flag values.
    ///
    /// The resource group comes from applying `{name}` substitution against
    /// `resource_group_template`; a template without the placeholder is used
    /// verbatim. The service, storage, and registry names are derived from
    /// `name` by concatenation. No further validation is performed on any of
    /// the values.
    pub fn resolve(image: &str, name: &str, resource_group_template: &str) -> Self {
        Self {
            image: image.to_string(),
            resource_group: resource_group_template.replace("{name}", name),
            container_service: format!("{}service", name),
            storage_account: format!("{}storage", name),
            container_registry: format!("{}registry", name),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
