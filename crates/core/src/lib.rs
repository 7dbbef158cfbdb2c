// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! caravel-core: configuration resolution for the caravel CLI tool

pub mod config;
pub mod credentials;
pub mod error;

pub use config::{DeployConfig, DeployMode, DEFAULT_IMAGE, DEFAULT_NAME, DEFAULT_RESOURCE_GROUP};
pub use credentials::{ClientArgs, ServicePrincipal};
pub use error::ConfigError;
