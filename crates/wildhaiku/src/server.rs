//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes haiku detection over the MCP protocol so AI assistants can call it
//! through the stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer over the same [`HaikuDetector`] the
//! CLI uses. The dictionary is loaded once and shared by every request; a
//! request may ask for its own line sizes, which builds a cheap detector
//! clone around the same dictionary.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use wildhaiku_core::HaikuDetector;
use wildhaiku_core::haiku::form_syllables;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `find_haikus` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FindHaikusParams {
    /// The text to search.
    pub text: String,
    /// Syllables per line. Defaults to the server's configured form (5-7-5 unless changed).
    pub line_sizes: Option<Vec<usize>>,
}

#[derive(Serialize)]
struct FindHaikusReport {
    count: usize,
    syllables: usize,
    haikus: Vec<Vec<String>>,
}

/// MCP server exposing haiku detection to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    detector: Arc<HaikuDetector>,
    max_input: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

#[tool_router]
impl ProjectServer {
    /// Create a server around a loaded detector.
    ///
    /// `max_input` bounds the size of any text a tool will accept.
    pub fn new(detector: Arc<HaikuDetector>, max_input: Option<usize>) -> Self {
        Self {
            detector,
            max_input,
            tool_router: Self::tool_router(),
        }
    }

    fn check_input(&self, text: &str) -> Result<(), McpError> {
        match self.max_input {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "dictionary_entries": self.detector.dictionary().len(),
            "line_sizes": self.detector.line_sizes(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Find haikus hiding in a block of text.
    #[tool(
        description = "Find haikus in text. Returns each distinct haiku as a list of lines, in the order found."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn find_haikus(
        &self,
        Parameters(params): Parameters<FindHaikusParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "find_haikus", line_sizes = ?params.line_sizes, "executing MCP tool");
        self.check_input(&params.text)?;

        let detection = match params.line_sizes {
            Some(sizes) => {
                if sizes.is_empty() || sizes.contains(&0) || form_syllables(&sizes).is_none() {
                    return Err(McpError::invalid_params(
                        format!(
                            "line_sizes must be non-empty, positive and summable, got {sizes:?}"
                        ),
                        None,
                    ));
                }
                HaikuDetector::clone(&self.detector)
                    .with_line_sizes(sizes)
                    .detect(&params.text)
            }
            None => self.detector.detect(&params.text),
        };

        let report = FindHaikusReport {
            count: detection.haikus.len(),
            syllables: detection.syllables,
            haikus: detection.haikus.iter().map(|h| h.render()).collect(),
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "find_haikus", count = report.count, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use find_haikus to search text for haikus.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
