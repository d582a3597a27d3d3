//! File Inspector MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing read-only file inspection
//! tools (`list_files`, `read_file`, `get_file_info`) plus two demonstration
//! tools (`echo`, `get_timestamp`).
//!
//! # Architecture
//!
//! - **core**: Core infrastructure including configuration, error handling, transports and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use file_inspector_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
