// SPDX-License-Identifier: MIT

//! Shelling out to the docker CLI to stage an image into a registry.

use std::process::Stdio;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum DockerError {
    #[error("Failed to run docker: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("docker {command} failed: {stderr}")]
    Failed { command: String, stderr: String },
}

/// Registry-qualified reference for `image` on `login_server`.
///
/// An existing registry prefix (first path segment containing `.` or `:`)
/// is replaced, matching docker tag semantics.
pub fn registry_image(image: &str, login_server: &str) -> String {
    let repository = match image.split_once('/') {
        Some((first, rest)) if first.contains('.') || first.contains(':') => rest,
        _ => image,
    };
    format!("{}/{}", login_server, repository)
}

/// Tag the local image for the registry and push it, authenticating with the
/// registry's admin credentials. The password goes over stdin, never argv.
pub async fn push(
    image: &str,
    login_server: &str,
    username: &str,
    password: &str,
) -> Result<String, DockerError> {
    let target = registry_image(image, login_server);

    run("tag", &["tag", image, &target], None).await?;
    run(
        "login",
        &["login", login_server, "--username", username, "--password-stdin"],
        Some(password),
    )
    .await?;
    tracing::info!(image = %target, "pushing image to registry");
    run("push", &["push", &target], None).await?;

    Ok(target)
}

async fn run(name: &str, args: &[&str], stdin: Option<&str>) -> Result<(), DockerError> {
    let mut command = Command::new("docker");
    command.args(args).stdout(Stdio::null()).stderr(Stdio::piped());
    if stdin.is_some() {
        command.stdin(Stdio::piped());
    }

    let mut child = command.spawn()?;
    if let (Some(input), Some(mut handle)) = (stdin, child.stdin.take()) {
        handle.write_all(input.as_bytes()).await?;
        // Closing stdin lets docker login read EOF
        drop(handle);
    }

    let output = child.wait_with_output().await?;
    if !output.status.success() {
        return Err(DockerError::Failed {
            command: name.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "docker_tests.rs"]
mod tests;
