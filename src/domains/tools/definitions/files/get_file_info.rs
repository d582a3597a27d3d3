//! File info tool definition.
//!
//! Reports type, size and timestamps of a file or directory.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::inspect;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the file info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileInfoParams {
    /// Path to the file or directory.
    pub path: String,
}

/// File info tool.
pub struct GetFileInfoTool;

impl GetFileInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_file_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get information about a file";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &GetFileInfoParams) -> CallToolResult {
        info!("File info tool called for path: {}", params.path);

        CallToolResult::success(vec![Content::text(inspect::get_file_info(&params.path))])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: GetFileInfoParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        info!("File info tool (HTTP) called for path: {}", params.path);

        let result = Self::execute(&params);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetFileInfoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: GetFileInfoParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                tokio::task::spawn_blocking(move || Self::execute(&params))
                    .await
                    .map_err(|e| McpError::internal_error(format!("Task failed: {e}"), None))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
