// SPDX-License-Identifier: MIT

//! Wiring: resolve configuration, pick a deployer, deploy, verify.

use caravel_adapters::{select, Deployer};
use caravel_core::{ClientArgs, DeployConfig, DeployMode};

use crate::args::CliArgs;

pub async fn run(args: CliArgs) -> anyhow::Result<()> {
    // Credentials load first; a missing variable fails here, before any
    // deployer exists and before any network call.
    let client_args = ClientArgs::from_env()?;
    let mode = DeployMode::from_flag(args.use_acr);
    let config = DeployConfig::resolve(&args.image, &args.name, &args.resource_group);
    tracing::info!(%mode, group = %config.resource_group, image = %config.image, "starting deployment");

    let deployer = select(mode, &client_args, config);
    execute(deployer.as_ref()).await
}

/// Deploy, announce the address, and print the cluster's HTTP response.
///
/// The verification GET is deliberately single-shot with no wait loop:
/// whether `deploy()` blocks until the address is actually reachable is an
/// integration risk inherited from the deployment contract.
pub async fn execute(deployer: &dyn Deployer) -> anyhow::Result<()> {
    deployer.deploy().await?;

    println!("\nContacting ACS cluster at http://{}", deployer.public_ip().await?);
    println!("Response:");
    let body = reqwest::get(format!("http://{}", deployer.public_ip().await?))
        .await?
        .text()
        .await?;
    println!("{}", body);
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
