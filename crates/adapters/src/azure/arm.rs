// SPDX-License-Identifier: MIT

//! Resource Manager operations used by the deployers.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{AzureClient, AzureError};

const RESOURCES_API: &str = "2017-05-10";
const CONTAINER_SERVICE_API: &str = "2017-01-31";
const REGISTRY_API: &str = "2017-10-01";

/// Master and agent-pool addresses of a provisioned container service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerServiceFqdns {
    pub master: String,
    pub agent: String,
}

/// Admin credentials for a container registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryCredentials {
    pub login_server: String,
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
struct ProvisioningResponse {
    properties: ProvisioningProperties,
}

#[derive(Deserialize)]
struct ProvisioningProperties {
    #[serde(rename = "provisioningState")]
    provisioning_state: String,
}

impl AzureClient {
    /// Create the resource group if it does not already exist (idempotent PUT).
    pub async fn ensure_resource_group(
        &self,
        group: &str,
        location: &str,
    ) -> Result<(), AzureError> {
        let url = format!(
            "{}/subscriptions/{}/resourcegroups/{}?api-version={}",
            self.management_url, self.subscription_id, group, RESOURCES_API
        );
        tracing::info!(group, location, "ensuring resource group");
        self.put_json(&url, &json!({ "location": location })).await?;
        Ok(())
    }

    /// Submit an ARM template deployment and block until it finishes.
    ///
    /// Polls `provisioningState` at the configured interval; `Succeeded`
    /// returns, `Failed` or `Canceled` is an error. Other states keep polling
    /// for as long as the remote side keeps reporting them.
    pub async fn deploy_template(
        &self,
        group: &str,
        deployment_name: &str,
        template: &Value,
    ) -> Result<(), AzureError> {
        let url = format!(
            "{}/subscriptions/{}/resourcegroups/{}/providers/Microsoft.Resources/deployments/{}?api-version={}",
            self.management_url, self.subscription_id, group, deployment_name, RESOURCES_API
        );
        let body = json!({
            "properties": {
                "mode": "Incremental",
                "template": template,
            }
        });
        tracing::info!(group, deployment = deployment_name, "submitting template deployment");
        self.put_json(&url, &body).await?;

        loop {
            let state = self.provisioning_state(&url).await?;
            tracing::debug!(deployment = deployment_name, state = %state, "deployment state");
            match state.as_str() {
                "Succeeded" => {
                    tracing::info!(deployment = deployment_name, "deployment succeeded");
                    return Ok(());
                }
                "Failed" | "Canceled" => {
                    return Err(AzureError::DeploymentFailed {
                        name: deployment_name.to_string(),
                        state,
                    })
                }
                _ => tokio::time::sleep(self.poll_interval).await,
            }
        }
    }

    /// Master and agent FQDNs of a container service.
    pub async fn container_service_fqdns(
        &self,
        group: &str,
        name: &str,
    ) -> Result<ContainerServiceFqdns, AzureError> {
        let url = format!(
            "{}/subscriptions/{}/resourcegroups/{}/providers/Microsoft.ContainerService/containerServices/{}?api-version={}",
            self.management_url, self.subscription_id, group, name, CONTAINER_SERVICE_API
        );
        let body: Value = self.get_json(&url).await?;

        let master = body
            .pointer("/properties/masterProfile/fqdn")
            .and_then(Value::as_str)
            .ok_or(AzureError::MissingField("properties.masterProfile.fqdn"))?;
        let agent = body
            .pointer("/properties/agentPoolProfiles/0/fqdn")
            .and_then(Value::as_str)
            .ok_or(AzureError::MissingField("properties.agentPoolProfiles[0].fqdn"))?;

        Ok(ContainerServiceFqdns { master: master.to_string(), agent: agent.to_string() })
    }

    /// Create a container registry with the admin user enabled and block
    /// until it is provisioned.
    pub async fn create_registry(
        &self,
        group: &str,
        name: &str,
        storage_account: &str,
        location: &str,
    ) -> Result<(), AzureError> {
        let url = self.registry_url(group, name);
        let body = super::templates::registry_resource(storage_account, location);
        tracing::info!(group, registry = name, "creating container registry");
        self.put_json(&url, &body).await?;

        loop {
            let state = self.provisioning_state(&url).await?;
            match state.as_str() {
                "Succeeded" => return Ok(()),
                "Failed" | "Canceled" => {
                    return Err(AzureError::DeploymentFailed { name: name.to_string(), state })
                }
                _ => tokio::time::sleep(self.poll_interval).await,
            }
        }
    }

    /// Login server plus admin username/password for a registry.
    pub async fn registry_credentials(
        &self,
        group: &str,
        name: &str,
    ) -> Result<RegistryCredentials, AzureError> {
        let registry: Value = self.get_json(&self.registry_url(group, name)).await?;
        let login_server = registry
            .pointer("/properties/loginServer")
            .and_then(Value::as_str)
            .ok_or(AzureError::MissingField("properties.loginServer"))?
            .to_string();

        let url = format!(
            "{}/subscriptions/{}/resourcegroups/{}/providers/Microsoft.ContainerRegistry/registries/{}/listCredentials?api-version={}",
            self.management_url, self.subscription_id, group, name, REGISTRY_API
        );
        let creds: Value = self.post_json(&url, &json!({})).await?;

        let username = creds
            .pointer("/username")
            .and_then(Value::as_str)
            .ok_or(AzureError::MissingField("username"))?
            .to_string();
        let password = creds
            .pointer("/passwords/0/value")
            .and_then(Value::as_str)
            .ok_or(AzureError::MissingField("passwords[0].value"))?
            .to_string();

        Ok(RegistryCredentials { login_server, username, password })
    }

    fn registry_url(&self, group: &str, name: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourcegroups/{}/providers/Microsoft.ContainerRegistry/registries/{}?api-version={}",
            self.management_url, self.subscription_id, group, name, REGISTRY_API
        )
    }

    async fn provisioning_state(&self, url: &str) -> Result<String, AzureError> {
        let response: ProvisioningResponse = self.get_json(url).await?;
        Ok(response.properties.provisioning_state)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AzureError> {
        let bearer = self.token.bearer().await?;
        let response = self.http.get(url).bearer_auth(bearer).send().await?;
        Self::deserialize(response).await
    }

    async fn put_json(&self, url: &str, body: &Value) -> Result<Value, AzureError> {
        let bearer = self.token.bearer().await?;
        let response = self.http.put(url).bearer_auth(bearer).json(body).send().await?;
        Self::deserialize(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, AzureError> {
        let bearer = self.token.bearer().await?;
        let response = self.http.post(url).bearer_auth(bearer).json(body).send().await?;
        Self::deserialize(response).await
    }

    async fn deserialize<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AzureError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AzureError::Api { status: status.as_u16(), body });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[path = "arm_tests.rs"]
mod tests;
