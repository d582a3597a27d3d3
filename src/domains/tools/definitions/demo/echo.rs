//! Echo tool definition.
//!
//! Echoes a message back together with a redacted view of the configured
//! API key, showing how a tool reads server configuration.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Number of API key characters shown before the key is elided.
const KEY_PREVIEW_CHARS: usize = 10;

/// Parameters for the echo tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct EchoParams {
    /// Message to echo back
    pub message: String,
}

/// Echo tool.
pub struct EchoTool;

impl EchoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "echo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Echo back a message (demonstrates basic tool functionality)";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &EchoParams, config: &Config) -> CallToolResult {
        info!("Echo tool called");

        let key = key_preview(config.credentials.api_key.as_deref());
        CallToolResult::success(vec![Content::text(format!(
            "Echo: {}\n\nAPI Key configured: {}",
            params.message, key
        ))])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: EchoParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&params, &config);

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
            input_schema: cached_schema_for_type::<EchoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: EchoParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config))
            }
            .boxed()
        })
    }
}

fn key_preview(key: Option<&str>) -> String {
    match key {
        None => "not-set".to_string(),
        Some(key) if key.chars().count() > KEY_PREVIEW_CHARS => {
            let head: String = key.chars().take(KEY_PREVIEW_CHARS).collect();
            format!("{head}...")
        }
        Some(key) => key.to_string(),
    }
}
