//! Read file tool definition.
//!
//! Returns the full UTF-8 content of a file, prefixed by a header line.

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

/// Parameters for the read file tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReadFileParams {
    /// Path to the file to read.
    pub path: String,
}

/// Read file tool - returns file contents as text.
pub struct ReadFileTool;

impl ReadFileTool {
    pub const NAME: &'static str = "read_file";

    pub const DESCRIPTION: &'static str = "Read file contents";

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &ReadFileParams) -> CallToolResult {
        info!("Read file tool called for path: {}", params.path);

        CallToolResult::success(vec![Content::text(inspect::read_file(&params.path))])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: ReadFileParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        info!("Read file tool (HTTP) called for path: {}", params.path);

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
            input_schema: cached_schema_for_type::<ReadFileParams>(),
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
                let params: ReadFileParams =
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_read_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("poem.txt");
        let content = "Roses are red\nviolets are blue\n";
        fs::write(&file, content).unwrap();

        let params = ReadFileParams {
            path: file.to_string_lossy().to_string(),
        };

        let result = ReadFileTool::execute(&params);
        assert_eq!(
            text_of(&result),
            format!("Contents of {}:\n{}", params.path, content)
        );
    }

    #[test]
    fn test_read_file_directory() {
        let temp_dir = TempDir::new().unwrap();
        let params = ReadFileParams {
            path: temp_dir.path().to_string_lossy().to_string(),
        };

        let result = ReadFileTool::execute(&params);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), format!("Path is not a file: {}", params.path));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_read_file_http_handler() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "abc").unwrap();

        let result =
            ReadFileTool::http_handler(serde_json::json!({ "path": file.to_string_lossy() }))
                .unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.ends_with(":\nabc"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_read_file_http_handler_wrong_type() {
        let result = ReadFileTool::http_handler(serde_json::json!({ "path": 42 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
