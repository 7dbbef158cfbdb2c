// SPDX-License-Identifier: MIT

//! Client for the Marathon scheduler on a DC/OS cluster master.
//!
//! ACS exposes Marathon through the master's admin router under `/marathon`.
//! Deploying the image means upserting one app definition and waiting for a
//! task to come up on the public agent pool.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

const POLL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum MarathonError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Marathon returned {status}: {body}")]
    Api { status: u16, body: String },
}

#[derive(Deserialize)]
struct AppResponse {
    app: AppStatus,
}

#[derive(Deserialize)]
struct AppStatus {
    #[serde(rename = "tasksRunning", default)]
    tasks_running: u32,
}

/// App definition for a single-instance docker app on the public agents.
///
/// Port 80 on the agent maps to port 80 in the container;
/// `acceptedResourceRoles` pins the task to the public pool so the agent
/// FQDN serves it.
pub fn app_definition(app_id: &str, image: &str) -> Value {
    json!({
        "id": app_id,
        "instances": 1,
        "cpus": 0.1,
        "mem": 128,
        "acceptedResourceRoles": ["slave_public"],
        "container": {
            "type": "DOCKER",
            "docker": {
                "image": image,
                "network": "BRIDGE",
                "portMappings": [
                    { "containerPort": 80, "hostPort": 80, "protocol": "tcp" }
                ]
            }
        }
    })
}

/// Marathon API client rooted at a cluster master.
#[derive(Clone)]
pub struct MarathonClient {
    http: reqwest::Client,
    base_url: String,
    poll_interval: Duration,
}

impl MarathonClient {
    /// Client for the Marathon instance behind the given master FQDN.
    pub fn for_master(master_fqdn: &str) -> Self {
        Self::new(format!("http://{}/marathon", master_fqdn))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Shorten the task poll interval (tests).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Upsert the app and block until at least one task is running.
    pub async fn deploy_app(&self, app_id: &str, image: &str) -> Result<(), MarathonError> {
        let url = format!("{}/v2/apps{}", self.base_url, app_id);
        let body = app_definition(app_id, image);
        tracing::info!(app = app_id, image, "submitting app to marathon");

        let response = self.http.put(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarathonError::Api { status: status.as_u16(), body });
        }

        loop {
            let response = self.http.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(MarathonError::Api { status: status.as_u16(), body });
            }
            let app: AppResponse = response.json().await?;
            if app.app.tasks_running >= 1 {
                tracing::info!(app = app_id, "app task running");
                return Ok(());
            }
            tracing::debug!(app = app_id, "waiting for app task");
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[cfg(test)]
#[path = "marathon_tests.rs"]
mod tests;
