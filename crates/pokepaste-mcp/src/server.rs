//! MCP surface: the `create_pokepaste` tool behind rmcp's server runtime.
//!
//! Framing, the initialize handshake, `ping` and protocol-level errors are rmcp's job; this
//! module only answers `tools/list` and `tools/call`.

use crate::error::PokepasteError;
use crate::schema::{TOOL_DESCRIPTION, TOOL_NAME, input_schema};
use crate::submit::PasteSubmitter;
use crate::validate::TeamValidator;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, CustomRequest, CustomResult, ErrorCode,
    Implementation, JsonObject, ListToolsResult, PaginatedRequestParams, ServerCapabilities,
    ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

const SERVER_NAME: &str = "pokepaste-mcp";
const TOOLS_CALL: &str = "tools/call";
const MISSING_TOOL_NAME: &str = "Missing tool name";

/// Stateless handler for the `create_pokepaste` tool.
#[derive(Debug)]
pub struct PokepasteServer {
    validator: TeamValidator,
    submitter: PasteSubmitter,
}

impl PokepasteServer {
    /// # Errors
    ///
    /// Returns an error if the tool input schema fails to compile.
    pub fn new(submitter: PasteSubmitter) -> crate::error::Result<Self> {
        Ok(Self {
            validator: TeamValidator::new()?,
            submitter,
        })
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        let schema_obj = input_schema().as_object().cloned().unwrap_or_else(JsonObject::new);
        Tool::new(TOOL_NAME, TOOL_DESCRIPTION, Arc::new(schema_obj))
    }

    /// Validate and upload one team.
    ///
    /// Validation, submission and transport failures all come back as an `is_error` result.
    pub async fn create_pokepaste(&self, arguments: &Value) -> CallToolResult {
        let outcome = match self.validator.validate(arguments) {
            Ok(team) => {
                info!(tool = TOOL_NAME, team_size = team.pokemon.len(), "submitting team");
                self.submitter.submit(&team).await
            }
            Err(violation) => Err(violation.into()),
        };

        match outcome {
            Ok(url) => CallToolResult::success(vec![Content::text(format!(
                "Successfully created Pokepaste: {url}"
            ))]),
            Err(e) => {
                warn!(tool = TOOL_NAME, error = %e, "tool call failed");
                CallToolResult::error(vec![Content::text(format!(
                    "Error creating Pokepaste: {e}"
                ))])
            }
        }
    }
}

impl ServerHandler for PokepasteServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            ..ServerInfo::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(vec![self.tool()]))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let name = request.name.as_ref();
        if name.is_empty() {
            return Err(McpError::invalid_params(MISSING_TOOL_NAME, None));
        }
        if name != TOOL_NAME {
            debug!(tool = %name, "rejecting unknown tool");
            let unknown = PokepasteError::UnknownTool(name.to_string());
            return Err(McpError::invalid_params(unknown.to_string(), None));
        }

        let arguments = request.arguments.map_or_else(|| json!({}), Value::Object);
        Ok(self.create_pokepaste(&arguments).await)
    }

    /// rmcp hands over a `tools/call` whose params lack a string `name` as a custom request.
    async fn on_custom_request(
        &self,
        request: CustomRequest,
        _context: RequestContext<RoleServer>,
    ) -> Result<CustomResult, McpError> {
        if request.method == TOOLS_CALL {
            return Err(McpError::invalid_params(MISSING_TOOL_NAME, None));
        }
        Err(McpError::new(ErrorCode::METHOD_NOT_FOUND, request.method, None))
    }
}
