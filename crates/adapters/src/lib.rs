// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! caravel-adapters: deployer strategies and the Azure/Marathon/docker
//! clients they delegate to.

pub mod azure;
pub mod deployer;
pub mod docker;
pub mod marathon;

pub use azure::{AzureClient, AzureError};
pub use deployer::{select, Deployer, DeployerError, DeployerKind};
pub use deployer::{AcrContainerDeployer, ContainerDeployer};
#[cfg(any(test, feature = "test-support"))]
pub use deployer::FakeDeployer;
pub use docker::DockerError;
pub use marathon::{MarathonClient, MarathonError};
