//! Error types for the pokepaste server.

use thiserror::Error;

/// Structural rejection of tool arguments.
///
/// `path` is a JSON pointer to the offending value (empty for the root).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid params{}: {message}", location(.path))]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

fn location(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at {path}")
    }
}

/// Main error type for paste creation.
#[derive(Error, Debug)]
pub enum PokepasteError {
    /// Arguments failed validation; nothing was sent.
    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    /// The paste host answered with something other than `303` + `Location`.
    #[error("Failed to create pokepaste: {status} {status_text}")]
    SubmissionFailed { status: u16, status_text: String },

    /// The request never produced a response (DNS, connect, reset).
    #[error("http transport error: {0}")]
    Transport(String),

    /// `tools/call` named a tool this server does not expose.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Configuration errors (bad base URL, client construction)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for PokepasteError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Result type alias for pokepaste operations.
pub type Result<T> = std::result::Result<T, PokepasteError>;
