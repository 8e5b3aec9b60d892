//! MCP server that uploads Pokemon teams to pokepast.es.
//!
//! Flow for `create_pokepaste`: untyped arguments -> [`validate::TeamValidator`] ->
//! [`submit::PasteSubmitter`] -> one POST through a [`transport::PasteTransport`] -> paste URL.

pub mod config;
pub mod error;
pub mod schema;
pub mod server;
pub mod submit;
pub mod team;
pub mod transport;
pub mod validate;

pub use error::{PokepasteError, Result, SchemaViolation};
pub use server::PokepasteServer;
pub use submit::{DEFAULT_BASE_URL, PasteSubmitter};
pub use team::TeamSubmission;
pub use transport::{PasteResponse, PasteTransport, ReqwestTransport};
