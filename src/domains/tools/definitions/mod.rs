//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod demo;
pub mod files;

pub use demo::{EchoTool, GetTimestampTool};
pub use files::{GetFileInfoTool, ListFilesTool, ReadFileTool};
