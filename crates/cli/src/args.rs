// SPDX-License-Identifier: MIT

//! Command-line arguments

use caravel_core::{DEFAULT_IMAGE, DEFAULT_NAME, DEFAULT_RESOURCE_GROUP};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "caravel",
    version,
    about = "Deploy a Docker image onto an Azure Container Service cluster"
)]
pub struct CliArgs {
    /// Docker image to deploy
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Add the image to an Azure Container Registry and deploy from there
    #[arg(long = "use-acr")]
    pub use_acr: bool,

    /// String to use in resource name templates (--resource-group, etc.)
    #[arg(short = 'n', long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Name of resource group to use; {name} is substituted with --name.
    /// (If nonexistent it will be created.)
    #[arg(short = 'g', long, default_value = DEFAULT_RESOURCE_GROUP)]
    pub resource_group: String,
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
