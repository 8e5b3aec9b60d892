#![allow(dead_code)]

use anyhow::Context as _;
use serde_json::{Value, json};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

pub fn set_json(species: &str) -> Value {
    json!({
        "name": species,
        "species": species,
        "item": "Light Ball",
        "ability": "Static",
        "moves": ["Thunderbolt", "Quick Attack"],
        "nature": "Jolly",
        "gender": "M",
        "evs": { "hp": 0, "atk": 252, "def": 0, "spa": 4, "spd": 0, "spe": 252 },
        "ivs": { "hp": 31, "atk": 31, "def": 31, "spa": 31, "spd": 31, "spe": 31 },
        "level": 50
    })
}

/// A running `pokepaste-mcp` binary driven over its stdio.
pub struct StdioSession {
    child: Child,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
}

impl StdioSession {
    pub fn spawn(paste_base_url: &str) -> anyhow::Result<Self> {
        let bin = env!("CARGO_BIN_EXE_pokepaste-mcp");
        let mut child = Command::new(bin)
            .arg("--paste-base-url")
            .arg(paste_base_url)
            .arg("--log-level")
            .arg("debug")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .context("spawn pokepaste-mcp")?;

        let stdin = child.stdin.take().context("child stdin")?;
        let stdout = child.stdout.take().context("child stdout")?;
        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout).lines(),
        })
    }

    pub async fn send(&mut self, msg: &Value) -> anyhow::Result<()> {
        self.send_line(&msg.to_string()).await
    }

    pub async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.stdin
            .write_all(format!("{line}\n").as_bytes())
            .await
            .context("write request")?;
        self.stdin.flush().await?;
        Ok(())
    }

    pub async fn recv(&mut self, timeout_dur: Duration) -> anyhow::Result<Value> {
        let line = tokio::time::timeout(timeout_dur, self.stdout.next_line())
            .await
            .context("timed out waiting for response")??
            .context("server closed stdout")?;
        serde_json::from_str(&line).with_context(|| format!("parse response line: {line}"))
    }

    pub async fn request(
        &mut self,
        id: u64,
        method: &str,
        params: Value,
        timeout_dur: Duration,
    ) -> anyhow::Result<Value> {
        self.send(&json!({ "jsonrpc": "2.0", "id": id, "method": method, "params": params }))
            .await?;
        let resp = self.recv(timeout_dur).await?;
        anyhow::ensure!(resp["id"] == id, "unexpected response id: {resp}");
        Ok(resp)
    }

    /// Run the MCP initialize handshake and return the `initialize` response.
    pub async fn initialize(&mut self, timeout_dur: Duration) -> anyhow::Result<Value> {
        let init = self
            .request(
                0,
                "initialize",
                json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "pokepaste-mcp-tests", "version": "0.0.0" }
                }),
                timeout_dur,
            )
            .await?;
        self.send(&json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }))
            .await?;
        Ok(init)
    }

    /// Wait for the server to exit on its own, stdin still open.
    pub async fn exit_status(
        mut self,
        timeout_dur: Duration,
    ) -> anyhow::Result<std::process::ExitStatus> {
        wait_for_exit(&mut self.child, timeout_dur).await
    }

    /// Close stdin and wait for a clean exit.
    pub async fn shutdown(self, timeout_dur: Duration) -> anyhow::Result<std::process::ExitStatus> {
        let Self {
            mut child, stdin, ..
        } = self;
        drop(stdin);
        wait_for_exit(&mut child, timeout_dur).await
    }
}

async fn wait_for_exit(
    child: &mut Child,
    timeout_dur: Duration,
) -> anyhow::Result<std::process::ExitStatus> {
    let status = tokio::time::timeout(timeout_dur, child.wait())
        .await
        .context("timed out waiting for exit")??;
    Ok(status)
}

pub fn tool_text(resp: &Value) -> anyhow::Result<&str> {
    resp.get("result")
        .and_then(|r| r.get("content"))
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("text"))
        .and_then(Value::as_str)
        .with_context(|| format!("tools/call response missing text content: {resp}"))
}

pub fn is_error(resp: &Value) -> bool {
    resp["result"]["isError"].as_bool().unwrap_or(false)
}
