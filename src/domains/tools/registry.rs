//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;

use super::definitions::{EchoTool, GetFileInfoTool, GetTimestampTool, ListFilesTool, ReadFileTool};

#[cfg(feature = "http")]
use super::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListFilesTool::NAME,
            ReadFileTool::NAME,
            GetFileInfoTool::NAME,
            EchoTool::NAME,
            GetTimestampTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListFilesTool::to_tool(),
            ReadFileTool::to_tool(),
            GetFileInfoTool::to_tool(),
            EchoTool::to_tool(),
            GetTimestampTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            ListFilesTool::NAME => ListFilesTool::http_handler(arguments),
            ReadFileTool::NAME => ReadFileTool::http_handler(arguments),
            GetFileInfoTool::NAME => GetFileInfoTool::http_handler(arguments),
            EchoTool::NAME => EchoTool::http_handler(arguments, self.config.clone()),
            GetTimestampTool::NAME => GetTimestampTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
