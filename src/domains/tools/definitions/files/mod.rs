//! File inspection tools: `list_files`, `read_file` and `get_file_info`.
//!
//! All three are read-only and never fail at the protocol level; every
//! outcome is rendered to text by [`inspect`] using the templates in
//! [`messages`].

pub mod get_file_info;
pub mod inspect;
pub mod list_files;
pub mod messages;
pub mod read_file;

pub use get_file_info::{GetFileInfoParams, GetFileInfoTool};
pub use inspect::{DirectoryEntry, EntryKind, FileMetadata, InspectError};
pub use list_files::{ListFilesParams, ListFilesTool};
pub use read_file::{ReadFileParams, ReadFileTool};
