// SPDX-License-Identifier: MIT

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage_and_flags() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--image")
        .stdout_has("--use-acr")
        .stdout_has("--name")
        .stdout_has("--resource-group");
}

#[test]
fn help_shows_defaults() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("mesosphere/simple-docker")
        .stdout_has("containersample")
        .stdout_has("{name}-group");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn unknown_flag_rejected() {
    cli().args(&["--bogus"]).fails().stderr_has("error:");
}

#[test]
fn use_acr_takes_no_argument() {
    cli().args(&["--use-acr=yes"]).fails().stderr_has("error:");
}
