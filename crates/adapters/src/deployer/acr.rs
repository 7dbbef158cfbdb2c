// SPDX-License-Identifier: MIT

//! Deployer that stages the image through an Azure Container Registry.

use async_trait::async_trait;
use caravel_core::DeployConfig;
use tracing::Instrument;

use super::container::{agent_address, provision_and_run};
use super::{Deployer, DeployerError, DeployerKind};
use crate::azure::templates::DEFAULT_LOCATION;
use crate::azure::AzureClient;
use crate::docker;

/// Provisions a registry, pushes the image into it, then deploys the
/// registry-qualified reference onto an ACS cluster.
pub struct AcrContainerDeployer {
    azure: AzureClient,
    config: DeployConfig,
    ssh_public_key: Option<String>,
}

impl AcrContainerDeployer {
    pub fn new(azure: AzureClient, config: DeployConfig, ssh_public_key: Option<String>) -> Self {
        Self { azure, config, ssh_public_key }
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    async fn stage_image(&self) -> Result<String, DeployerError> {
        self.azure
            .create_registry(
                &self.config.resource_group,
                &self.config.container_registry,
                &self.config.storage_account,
                DEFAULT_LOCATION,
            )
            .await?;
        let creds = self
            .azure
            .registry_credentials(&self.config.resource_group, &self.config.container_registry)
            .await?;
        let staged =
            docker::push(&self.config.image, &creds.login_server, &creds.username, &creds.password)
                .await?;
        Ok(staged)
    }
}

#[async_trait]
impl Deployer for AcrContainerDeployer {
    fn kind(&self) -> DeployerKind {
        DeployerKind::AcrContainer
    }

    async fn deploy(&self) -> Result<(), DeployerError> {
        let span = tracing::info_span!("deploy", group = %self.config.resource_group, image = %self.config.image, registry = %self.config.container_registry);
        async {
            self.azure
                .ensure_resource_group(&self.config.resource_group, DEFAULT_LOCATION)
                .await?;
            let staged = self.stage_image().await?;
            provision_and_run(&self.azure, &self.config, self.ssh_public_key.as_deref(), &staged)
                .await
        }
        .instrument(span)
        .await
    }

    async fn public_ip(&self) -> Result<String, DeployerError> {
        agent_address(&self.azure, &self.config).await
    }
}
