// SPDX-License-Identifier: MIT

use std::time::Duration;

use caravel_core::{ClientArgs, DeployConfig, DeployMode, ServicePrincipal, DEFAULT_IMAGE};
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn client_args() -> ClientArgs {
    ClientArgs {
        credentials: ServicePrincipal {
            client_id: "client".into(),
            secret: "secret".into(),
            tenant: "tenant".into(),
        },
        subscription_id: "sub-1".into(),
        ssh_public_key: None,
    }
}

fn demo_config() -> DeployConfig {
    DeployConfig::resolve(DEFAULT_IMAGE, "demo", "{name}-group")
}

#[yare::parameterized(
    without_acr = { DeployMode::Direct,   DeployerKind::Container },
    with_acr    = { DeployMode::Registry, DeployerKind::AcrContainer },
)]
fn select_picks_variant_by_mode(mode: DeployMode, expected: DeployerKind) {
    let deployer = select(mode, &client_args(), demo_config());
    assert_eq!(deployer.kind(), expected);
}

#[tokio::test]
async fn fake_records_call_order() {
    let fake = FakeDeployer::new("1.2.3.4");
    fake.deploy().await.unwrap();
    assert_eq!(fake.public_ip().await.unwrap(), "1.2.3.4");
    assert_eq!(fake.public_ip().await.unwrap(), "1.2.3.4");
    assert_eq!(fake.calls(), vec!["deploy", "public_ip", "public_ip"]);
    assert_eq!(fake.deploy_count(), 1);
}

/// Full direct-deploy flow against a mock ARM + Marathon endpoint: resource
/// group, template deployment with one poll, fqdn lookup, app submission.
#[tokio::test]
async fn container_deployer_provisions_then_runs_app() {
    let server = MockServer::start().await;
    let host = server.address().to_string();

    Mock::given(method("POST"))
        .and(path("/tenant/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "expires_in": "3600"
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/subscriptions/sub-1/resourcegroups/demo-group"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path_regex(r"deployments/caravel-"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": { "provisioningState": "Accepted" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"deployments/caravel-"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": { "provisioningState": "Succeeded" }
        })))
        .mount(&server)
        .await;
    // Master "fqdn" points back at the mock so the Marathon calls land here too
    Mock::given(method("GET"))
        .and(path_regex(r"containerServices/demoservice$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {
                "masterProfile": { "fqdn": host },
                "agentPoolProfiles": [ { "fqdn": "agents.eastus.cloudapp.azure.com" } ]
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/marathon/v2/apps/demoservice"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "/demoservice" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/marathon/v2/apps/demoservice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "app": { "tasksRunning": 1 }
        })))
        .mount(&server)
        .await;

    let azure = AzureClient::new(&client_args())
        .with_management_url(server.uri())
        .with_login_url(server.uri())
        .with_poll_interval(Duration::from_millis(1));
    let deployer = ContainerDeployer::new(azure, demo_config(), None);

    deployer.deploy().await.unwrap();
    let address = deployer.public_ip().await.unwrap();
    assert_eq!(address, "agents.eastus.cloudapp.azure.com");
}

#[test]
fn resolved_names_reach_the_deployer() {
    let deployer = ContainerDeployer::new(AzureClient::new(&client_args()), demo_config(), None);
    let config = deployer.config();
    assert_eq!(config.resource_group, "demo-group");
    assert_eq!(config.container_service, "demoservice");
    assert_eq!(config.storage_account, "demostorage");
    assert_eq!(config.container_registry, "demoregistry");
    assert_eq!(config.image, DEFAULT_IMAGE);
}
