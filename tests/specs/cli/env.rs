// SPDX-License-Identifier: MIT

//! Credential-loading specs: missing environment fails fast, before any
//! deployer is constructed or any network call is made.

use crate::prelude::*;

#[test]
fn missing_all_env_names_the_first_variable() {
    cli().fails().stderr_has("AZURE_CLIENT_ID");
}

#[test]
fn each_missing_variable_is_named() {
    for missing in AZURE_VARS {
        let mut spec = cli();
        for var in AZURE_VARS {
            if var != missing {
                spec = spec.env(var, "value");
            }
        }
        spec.fails().stderr_has(missing);
    }
}

#[test]
fn missing_env_fails_even_with_custom_flags() {
    cli()
        .args(&["--name", "demo", "--resource-group", "custom-rg", "--use-acr"])
        .fails()
        .stderr_has("Missing required environment variable");
}
