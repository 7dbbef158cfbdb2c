// SPDX-License-Identifier: MIT

//! Deployer that runs the image straight from its public reference.

use async_trait::async_trait;
use caravel_core::DeployConfig;
use tracing::Instrument;
use uuid::Uuid;

use super::{Deployer, DeployerError, DeployerKind};
use crate::azure::templates::{self, DEFAULT_LOCATION};
use crate::azure::AzureClient;
use crate::marathon::MarathonClient;

/// Provisions an ACS cluster and submits the image to its Marathon scheduler.
pub struct ContainerDeployer {
    azure: AzureClient,
    config: DeployConfig,
    ssh_public_key: Option<String>,
}

impl ContainerDeployer {
    pub fn new(azure: AzureClient, config: DeployConfig, ssh_public_key: Option<String>) -> Self {
        Self { azure, config, ssh_public_key }
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }
}

/// Provision the cluster described by `config`, then run `image` on it.
///
/// Shared between the direct and registry-staged variants; the only thing
/// that differs between them is which image reference ends up here.
pub(super) async fn provision_and_run(
    azure: &AzureClient,
    config: &DeployConfig,
    ssh_public_key: Option<&str>,
    image: &str,
) -> Result<(), DeployerError> {
    azure.ensure_resource_group(&config.resource_group, DEFAULT_LOCATION).await?;

    let template = templates::acs_template(
        &config.container_service,
        &config.container_service,
        DEFAULT_LOCATION,
        ssh_public_key,
    );
    let deployment_name = format!("caravel-{}", Uuid::new_v4());
    azure.deploy_template(&config.resource_group, &deployment_name, &template).await?;

    let fqdns = azure
        .container_service_fqdns(&config.resource_group, &config.container_service)
        .await?;
    let marathon = MarathonClient::for_master(&fqdns.master);
    marathon.deploy_app(&app_id(config), image).await?;
    Ok(())
}

/// Marathon app id for this run, derived from the service name.
pub(super) fn app_id(config: &DeployConfig) -> String {
    format!("/{}", config.container_service)
}

/// The cluster's public address: the agent pool FQDN.
pub(super) async fn agent_address(
    azure: &AzureClient,
    config: &DeployConfig,
) -> Result<String, DeployerError> {
    let fqdns = azure
        .container_service_fqdns(&config.resource_group, &config.container_service)
        .await?;
    Ok(fqdns.agent)
}

#[async_trait]
impl Deployer for ContainerDeployer {
    fn kind(&self) -> DeployerKind {
        DeployerKind::Container
    }

    async fn deploy(&self) -> Result<(), DeployerError> {
        let span = tracing::info_span!("deploy", group = %self.config.resource_group, image = %self.config.image);
        provision_and_run(&self.azure, &self.config, self.ssh_public_key.as_deref(), &self.config.image)
            .instrument(span)
            .await
    }

    async fn public_ip(&self) -> Result<String, DeployerError> {
        agent_address(&self.azure, &self.config).await
    }
}
