use anyhow::Context as _;
use clap::Parser as _;
use pokepaste_mcp::config::{Cli, init_tracing};
use pokepaste_mcp::{PasteSubmitter, PokepasteServer, ReqwestTransport};
use rmcp::ServiceExt as _;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let base_url = cli.base_url()?;
    let transport = ReqwestTransport::new(&cli.user_agent).context("build HTTP client")?;
    let submitter = PasteSubmitter::new(base_url, Arc::new(transport));
    tracing::info!(base_url = %submitter.base_url(), "pokepaste-mcp listening on stdio");
    let server = PokepasteServer::new(submitter)?;

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("MCP initialize handshake")?;
    let reason = service.waiting().await?;
    tracing::info!(?reason, "pokepaste-mcp stopped");
    Ok(())
}
