//! # mesmer-market
//!
//! Launcher for the companion marketplace process.
//!
//! The marketplace is an independent long-running service: it is spawned
//! once per session, probed over HTTP until it answers, never awaited
//! for results, and killed at shutdown. Readiness is an explicit health
//! probe with bounded retries rather than a fixed sleep, so a slow start
//! is tolerated and a dead start is reported.

use mesmer_core::{MesmerError, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};

const READY_ATTEMPTS: u32 = 20;
const READY_POLL: Duration = Duration::from_millis(500);

/// Handle to the running marketplace process
pub struct Marketplace {
    child: Child,
    url: String,
}

impl Marketplace {
    /// Spawn the marketplace command and wait for it to answer at `url`
    pub async fn launch(command: &str, url: &str) -> Result<Self> {
        let (program, args) = split_command(command)?;

        tracing::info!("Launching marketplace: {}", command);

        let child = Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| MesmerError::Market(format!("Failed to spawn '{}': {}", command, e)))?;

        wait_ready(url, READY_ATTEMPTS, READY_POLL).await?;

        Ok(Self {
            child,
            url: url.to_string(),
        })
    }

    /// Address the marketplace answered on
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Terminate the marketplace process
    pub async fn shutdown(mut self) {
        tracing::info!("Stopping marketplace at {}", self.url);
        if let Err(e) = self.child.kill().await {
            tracing::warn!("Failed to stop marketplace: {}", e);
        }
    }
}

/// Split a command line into program and arguments
fn split_command(command: &str) -> Result<(String, Vec<String>)> {
    let mut parts = command.split_whitespace().map(str::to_string);
    let program = parts
        .next()
        .ok_or_else(|| MesmerError::Market("Empty marketplace command".to_string()))?;
    Ok((program, parts.collect()))
}

/// Poll `url` until it returns a 2xx response
async fn wait_ready(url: &str, attempts: u32, poll: Duration) -> Result<()> {
    let client = reqwest::Client::new();

    for attempt in 1..=attempts {
        match client.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("Marketplace ready at {}", url);
                return Ok(());
            }
            Ok(response) => {
                tracing::debug!(
                    "Marketplace not ready ({}), attempt {}/{}",
                    response.status(),
                    attempt,
                    attempts
                );
            }
            Err(e) => {
                tracing::debug!(
                    "Marketplace not reachable ({}), attempt {}/{}",
                    e,
                    attempt,
                    attempts
                );
            }
        }
        tokio::time::sleep(poll).await;
    }

    Err(MesmerError::Market(format!(
        "Marketplace did not become ready at {} after {} attempts",
        url, attempts
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[test]
    fn test_split_command() {
        let (program, args) = split_command("python3 marketplace.py --port 5000").unwrap();
        assert_eq!(program, "python3");
        assert_eq!(args, vec!["marketplace.py", "--port", "5000"]);
    }

    #[test]
    fn test_split_command_empty() {
        assert!(split_command("   ").is_err());
    }

    #[tokio::test]
    async fn test_wait_ready_succeeds_once_listening() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok")
                .await;
        });

        let url = format!("http://{}/", addr);
        wait_ready(&url, 5, Duration::from_millis(20)).await.unwrap();
    }

    #[tokio::test]
    async fn test_wait_ready_gives_up() {
        // Bind then drop to get a port nothing is listening on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/", addr);
        let result = wait_ready(&url, 2, Duration::from_millis(10)).await;
        assert!(matches!(result, Err(MesmerError::Market(_))));
    }
}
