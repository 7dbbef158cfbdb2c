// SPDX-License-Identifier: MIT

use super::*;

#[yare::parameterized(
    plain_repo         = { "simple-docker",                 "demo.azurecr.io/simple-docker" },
    org_repo           = { "mesosphere/simple-docker",      "demo.azurecr.io/mesosphere/simple-docker" },
    with_tag           = { "mesosphere/simple-docker:v1",   "demo.azurecr.io/mesosphere/simple-docker:v1" },
    replaces_registry  = { "other.io/team/app",             "demo.azurecr.io/team/app" },
    replaces_with_port = { "localhost:5000/app",            "demo.azurecr.io/app" },
)]
fn registry_image_cases(image: &str, expected: &str) {
    assert_eq!(registry_image(image, "demo.azurecr.io"), expected);
}

#[tokio::test]
async fn failed_command_reports_name() {
    // `docker` is absent in CI; either spawn fails or the subcommand does.
    let result = run("version", &["version", "--format", "{{bogus}}"], None).await;
    match result {
        Err(DockerError::Spawn(_)) | Err(DockerError::Failed { .. }) => {}
        Ok(()) => panic!("bogus docker invocation unexpectedly succeeded"),
    }
}
