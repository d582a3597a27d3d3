//! Message templates for the file inspection tools.
//!
//! Every text a file tool can return is defined here as plain data, so the
//! exact wording is stable and can be checked independently of any
//! filesystem access. Templates use `{path}` and `{message}` placeholders,
//! substituted by [`render`].

use super::inspect::InspectError;

// ============================================================================
// Success Templates
// ============================================================================

/// Header line preceding a directory listing.
pub const LISTING_HEADER: &str = "Files in {path}:";

/// Report for a directory without entries.
pub const DIRECTORY_EMPTY: &str = "Directory is empty: {path}";

/// Header line preceding file contents.
pub const CONTENTS_HEADER: &str = "Contents of {path}:";

/// Header line preceding a metadata report.
pub const FILE_INFO_HEADER: &str = "File Info:";

// ============================================================================
// Error Templates
// ============================================================================

/// Error templates for one operation, one per failure category.
///
/// A category an operation cannot produce is `None`; if it shows up anyway it
/// is rendered through the `other` template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub not_found: &'static str,
    pub wrong_type: Option<&'static str>,
    pub permission_denied: &'static str,
    pub decoding: Option<&'static str>,
    pub other: &'static str,
}

/// Templates for `list_files`.
pub const LIST_FILES: Messages = Messages {
    not_found: "Directory not found: {path}",
    wrong_type: Some("Path is not a directory: {path}"),
    permission_denied: "Permission denied accessing: {path}",
    decoding: None,
    other: "Error listing directory: {message}",
};

/// Templates for `read_file`.
pub const READ_FILE: Messages = Messages {
    not_found: "File not found: {path}",
    wrong_type: Some("Path is not a file: {path}"),
    permission_denied: "Permission denied reading: {path}",
    decoding: Some("File is not text or uses unsupported encoding: {path}"),
    other: "Error reading file: {message}",
};

/// Templates for `get_file_info`.
pub const GET_FILE_INFO: Messages = Messages {
    not_found: "Path not found: {path}",
    wrong_type: None,
    permission_denied: "Permission denied accessing: {path}",
    decoding: None,
    other: "Error getting file info: {message}",
};

impl Messages {
    /// Render the message for `error` raised while handling `path`.
    pub fn render_error(&self, error: &InspectError, path: &str) -> String {
        let template = match error {
            InspectError::NotFound => Some(self.not_found),
            InspectError::WrongType => self.wrong_type,
            InspectError::PermissionDenied => Some(self.permission_denied),
            InspectError::Decoding(_) => self.decoding,
            InspectError::Other(_) => Some(self.other),
        };

        let message = error.to_string();
        render(template.unwrap_or(self.other), path, &message)
    }
}

/// Substitute `{path}` and `{message}` in a template.
///
/// Substitution is a single left-to-right pass, so placeholder-like text
/// inside the substituted values is copied verbatim.
pub fn render(template: &str, path: &str, message: &str) -> String {
    let mut out = String::with_capacity(template.len() + path.len() + message.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix("{path}") {
            out.push_str(path);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{message}") {
            out.push_str(message);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
