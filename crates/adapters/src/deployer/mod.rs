// SPDX-License-Identifier: MIT

//! The two deployer strategies behind the `--use-acr` flag.

mod acr;
mod container;
#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use acr::AcrContainerDeployer;
pub use container::ContainerDeployer;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDeployer;

use async_trait::async_trait;
use caravel_core::{ClientArgs, DeployConfig, DeployMode};
use thiserror::Error;

use crate::azure::{AzureClient, AzureError};
use crate::docker::DockerError;
use crate::marathon::MarathonError;

#[derive(Debug, Error)]
pub enum DeployerError {
    #[error("Azure error: {0}")]
    Azure(#[from] AzureError),

    #[error("Marathon error: {0}")]
    Marathon(#[from] MarathonError),

    #[error("Docker error: {0}")]
    Docker(#[from] DockerError),
}

/// Which variant a deployer is. Lets callers verify strategy selection
/// without touching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployerKind {
    Container,
    AcrContainer,
    #[cfg(any(test, feature = "test-support"))]
    Fake,
}

/// One deployment target, provisioned and addressed.
///
/// `deploy` may block until the remote system reports readiness; it is called
/// once per run. `public_ip` resolves the cluster's public address and may be
/// called repeatedly.
#[async_trait]
pub trait Deployer: Send + Sync {
    fn kind(&self) -> DeployerKind;

    async fn deploy(&self) -> Result<(), DeployerError>;

    async fn public_ip(&self) -> Result<String, DeployerError>;
}

/// Construct the deployer variant for `mode`. Called once at startup.
pub fn select(mode: DeployMode, args: &ClientArgs, config: DeployConfig) -> Box<dyn Deployer> {
    let azure = AzureClient::new(args);
    let ssh_key = args.ssh_public_key.clone();
    match mode {
        DeployMode::Direct => Box::new(ContainerDeployer::new(azure, config, ssh_key)),
        DeployMode::Registry => Box::new(AcrContainerDeployer::new(azure, config, ssh_key)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
