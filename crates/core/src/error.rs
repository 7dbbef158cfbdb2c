// SPDX-License-Identifier: MIT

//! Configuration errors

use thiserror::Error;

/// Errors raised while resolving configuration, before any deployer exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Environment variable {0} is not valid UTF-8")]
    NotUnicode(&'static str),
}
