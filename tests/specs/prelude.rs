// SPDX-License-Identifier: MIT

//! Shared helpers for the spec suite.

#![allow(dead_code)]

use assert_cmd::Command;

pub const AZURE_VARS: [&str; 4] = [
    "AZURE_CLIENT_ID",
    "AZURE_CLIENT_SECRET",
    "AZURE_TENANT_ID",
    "AZURE_SUBSCRIPTION_ID",
];

/// Start building a `caravel` invocation with a scrubbed Azure environment.
pub fn cli() -> Spec {
    #[allow(clippy::unwrap_used)]
    let mut cmd = Command::cargo_bin("caravel").unwrap();
    for var in AZURE_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("AZURE_SSH_PUBLIC_KEY");
    Spec { cmd }
}

pub struct Spec {
    cmd: Command,
}

impl Spec {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, name: &str, value: &str) -> Self {
        self.cmd.env(name, value);
        self
    }

    pub fn passes(self) -> Verdict {
        self.finish(true)
    }

    pub fn fails(self) -> Verdict {
        self.finish(false)
    }

    fn finish(mut self, expect_success: bool) -> Verdict {
        #[allow(clippy::unwrap_used)]
        let output = self.cmd.output().unwrap();
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        assert_eq!(
            output.status.success(),
            expect_success,
            "unexpected exit status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status,
            stdout,
            stderr
        );
        Verdict { stdout, stderr }
    }
}

pub struct Verdict {
    pub stdout: String,
    pub stderr: String,
}

impl Verdict {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }
}
