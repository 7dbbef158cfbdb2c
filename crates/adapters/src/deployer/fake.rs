// SPDX-License-Identifier: MIT

//! Call-recording deployer for tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{Deployer, DeployerError, DeployerKind};

/// Records `deploy`/`public_ip` invocations and answers with a fixed address.
#[derive(Clone, Default)]
pub struct FakeDeployer {
    address: String,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl FakeDeployer {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into(), calls: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Method names in invocation order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    pub fn deploy_count(&self) -> usize {
        self.calls.lock().iter().filter(|c| **c == "deploy").count()
    }
}

#[async_trait]
impl Deployer for FakeDeployer {
    fn kind(&self) -> DeployerKind {
        DeployerKind::Fake
    }

    async fn deploy(&self) -> Result<(), DeployerError> {
        self.calls.lock().push("deploy");
        Ok(())
    }

    async fn public_ip(&self) -> Result<String, DeployerError> {
        self.calls.lock().push("public_ip");
        Ok(self.address.clone())
    }
}
