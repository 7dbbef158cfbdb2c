// SPDX-License-Identifier: MIT

//! ARM template bodies for the resources this tool provisions.
//!
//! Built with `serde_json::json!` rather than shipping template files; the
//! only values that vary are resource names, the location, and the optional
//! SSH key.

use serde_json::{json, Value};

/// Region everything is provisioned into.
pub const DEFAULT_LOCATION: &str = "eastus";

/// Admin user on the cluster's linux profile.
pub const ADMIN_USERNAME: &str = "azureuser";

const TEMPLATE_SCHEMA: &str =
    "https://schema.management.azure.com/schemas/2015-01-01/deploymentTemplate.json#";

/// ARM template for a DC/OS container service with one public agent pool.
///
/// `dns_prefix` seeds both the master and agent DNS names, which must be
/// distinct; the agent pool serves deployed apps on port 80.
pub fn acs_template(
    service_name: &str,
    dns_prefix: &str,
    location: &str,
    ssh_public_key: Option<&str>,
) -> Value {
    let mut linux_profile = json!({ "adminUsername": ADMIN_USERNAME });
    if let Some(key) = ssh_public_key {
        linux_profile["ssh"] = json!({ "publicKeys": [ { "keyData": key } ] });
    }

    json!({
        "$schema": TEMPLATE_SCHEMA,
        "contentVersion": "1.0.0.0",
        "resources": [
            {
                "type": "Microsoft.ContainerService/containerServices",
                "apiVersion": "2017-01-31",
                "name": service_name,
                "location": location,
                "properties": {
                    "orchestratorProfile": { "orchestratorType": "DCOS" },
                    "masterProfile": {
                        "count": 1,
                        "dnsPrefix": format!("{}mgmt", dns_prefix),
                    },
                    "agentPoolProfiles": [
                        {
                            "name": "agentpools",
                            "count": 1,
                            "vmSize": "Standard_D2_v2",
                            "dnsPrefix": format!("{}agents", dns_prefix),
                        }
                    ],
                    "linuxProfile": linux_profile,
                }
            }
        ]
    })
}

/// Resource body for a Basic-tier registry with the admin user enabled.
///
/// The admin user is what `listCredentials` returns and what the docker
/// push authenticates with.
pub fn registry_resource(storage_account: &str, location: &str) -> Value {
    json!({
        "location": location,
        "sku": { "name": "Basic" },
        "properties": {
            "adminUserEnabled": true,
            "storageAccount": { "name": storage_account },
        }
    })
}

#[cfg(test)]
#[path = "templates_tests.rs"]
mod tests;
