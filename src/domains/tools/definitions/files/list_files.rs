//! List files tool definition.
//!
//! A tool that lists the direct children of a directory.

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

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list files tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListFilesParams {
    /// Path to the directory to list.
    pub path: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List files tool - lists entries of a directory, one level deep.
pub struct ListFilesTool;

impl ListFilesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_files";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List files in a directory";

    /// Execute the tool logic.
    ///
    /// Every outcome, including a missing or unreadable directory, is a
    /// successful result carrying the report text.
    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &ListFilesParams) -> CallToolResult {
        info!("List files tool called for path: {}", params.path);

        CallToolResult::success(vec![Content::text(inspect::list_files(&params.path))])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: ListFilesParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        info!("List files tool (HTTP) called for path: {}", params.path);

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
            input_schema: cached_schema_for_type::<ListFilesParams>(),
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
                let params: ListFilesParams =
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_list_files_execute() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("file1.txt"), "content").unwrap();
        fs::create_dir(temp_dir.path().join("subdir")).unwrap();

        let params = ListFilesParams {
            path: temp_dir.path().to_string_lossy().to_string(),
        };

        let result = ListFilesTool::execute(&params);
        assert!(!result.is_error.unwrap_or(false));

        let text = text_of(&result);
        assert!(text.starts_with(&format!("Files in {}:\n", params.path)));
        assert!(text.contains("file1.txt (file)"));
        assert!(text.contains("subdir (directory)"));
    }

    #[test]
    fn test_list_files_nonexistent_is_not_a_tool_error() {
        let params = ListFilesParams {
            path: "/nonexistent/path/12345".to_string(),
        };

        let result = ListFilesTool::execute(&params);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(
            text_of(&result),
            "Directory not found: /nonexistent/path/12345"
        );
    }

    #[test]
    fn test_to_tool_requires_path() {
        let tool = ListFilesTool::to_tool();
        assert_eq!(tool.name, "list_files");

        let required = tool.input_schema.get("required").cloned().unwrap();
        assert_eq!(required, serde_json::json!(["path"]));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_list_files_http_handler() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("test.txt"), "content").unwrap();

        let args = serde_json::json!({ "path": temp_dir.path().to_string_lossy() });

        let result = ListFilesTool::http_handler(args).unwrap();
        assert_eq!(result["isError"], serde_json::json!(false));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_list_files_http_handler_missing_param() {
        let result = ListFilesTool::http_handler(serde_json::json!({}));
        assert!(result.is_err());
    }
}
