//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{EchoTool, GetFileInfoTool, GetTimestampTool, ListFilesTool, ReadFileTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListFilesTool::create_route())
        .with_route(ReadFileTool::create_route())
        .with_route(GetFileInfoTool::create_route())
        .with_route(EchoTool::create_route(config))
        .with_route(GetTimestampTool::create_route())
}
