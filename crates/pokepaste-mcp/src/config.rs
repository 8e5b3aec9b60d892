//! Command line / environment configuration and logging setup.

use crate::error::{PokepasteError, Result};
use crate::submit::DEFAULT_BASE_URL;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("pokepaste-mcp/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// MCP stdio server exposing `create_pokepaste`.
#[derive(Debug, Clone, Parser)]
#[command(name = "pokepaste-mcp", version, about)]
pub struct Cli {
    /// Paste host scheme + host; `/create` is appended for uploads.
    #[arg(long, env = "POKEPASTE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub paste_base_url: String,

    /// Log level (overridden by `RUST_LOG`).
    #[arg(long, env = "POKEPASTE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "POKEPASTE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// `User-Agent` sent to the paste host.
    #[arg(long, env = "POKEPASTE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Cli {
    /// The configured base URL, checked and without a trailing `/`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is an absolute `http`/`https` URL.
    pub fn base_url(&self) -> Result<String> {
        let url = Url::parse(&self.paste_base_url).map_err(|e| {
            PokepasteError::Config(format!(
                "invalid paste base URL '{}': {e}",
                self.paste_base_url
            ))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PokepasteError::Config(format!(
                "paste base URL must be http(s), got '{}'",
                url.scheme()
            )));
        }
        Ok(self.paste_base_url.trim_end_matches('/').to_string())
    }
}

/// Install the global `tracing` subscriber. Output goes to stderr; stdout is the protocol stream.
pub fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    match cli.log_format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
    }
}
