//! Timestamp tool definition.

use chrono::{DateTime, SecondsFormat, Utc};
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// The timestamp tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetTimestampParams {}

/// Timestamp tool - reports the current UTC time.
pub struct GetTimestampTool;

impl GetTimestampTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_timestamp";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get current timestamp in ISO format";

    #[instrument(skip_all)]
    pub fn execute(_params: &GetTimestampParams) -> CallToolResult {
        info!("Timestamp tool called");

        CallToolResult::success(vec![Content::text(format_timestamp(Utc::now()))])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(_arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let result = Self::execute(&GetTimestampParams::default());

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
            input_schema: cached_schema_for_type::<GetTimestampParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    ///
    /// Arguments are ignored.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok::<_, McpError>(Self::execute(&GetTimestampParams::default())) }.boxed()
        })
    }
}

/// RFC 3339 with an explicit `+00:00` offset. Microseconds are shown only
/// when non-zero.
fn format_timestamp(now: DateTime<Utc>) -> String {
    let precision = if now.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };

    format!(
        "Current UTC timestamp: {}",
        now.to_rfc3339_opts(precision, false)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            format_timestamp(at),
            "Current UTC timestamp: 2024-03-09T14:05:07+00:00"
        );

        let with_micros = at + chrono::Duration::microseconds(42);
        assert_eq!(
            format_timestamp(with_micros),
            "Current UTC timestamp: 2024-03-09T14:05:07.000042+00:00"
        );
    }

    #[test]
    fn test_execute_reports_now() {
        let result = GetTimestampTool::execute(&GetTimestampParams::default());
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        };

        let stamp = text.strip_prefix("Current UTC timestamp: ").unwrap();
        let parsed = DateTime::parse_from_rfc3339(stamp).unwrap();
        assert!((Utc::now() - parsed.with_timezone(&Utc)).num_seconds() < 60);
    }
}
