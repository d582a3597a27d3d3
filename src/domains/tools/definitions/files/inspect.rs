//! Read-only filesystem inspection.
//!
//! Each public operation takes a path string and always returns a text
//! report. Checks run in a fixed order: existence, then entry type, then the
//! single filesystem read. The first failing step decides the message.
//!
//! Paths are normalized before use: an empty path is the current directory,
//! and repeated or trailing separators and `.` components are dropped.
//! Messages always quote the caller's string unchanged.
//!
//! The checks and the read are separate calls, so an entry changed in
//! between surfaces whatever error the read itself produces.

use std::fmt;
use std::fs::{self, DirEntry, Metadata};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::{debug, warn};

use super::messages::{
    self, CONTENTS_HEADER, DIRECTORY_EMPTY, FILE_INFO_HEADER, GET_FILE_INFO, LIST_FILES,
    LISTING_HEADER, READ_FILE,
};

// ============================================================================
// Types
// ============================================================================

/// Failure categories of an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    /// No entry exists at the path.
    #[error("no such file or directory")]
    NotFound,

    /// The entry exists but is the wrong kind for the operation.
    #[error("wrong entry type")]
    WrongType,

    /// Access was refused by the operating system.
    #[error("permission denied")]
    PermissionDenied,

    /// The file content is not valid UTF-8.
    #[error("{0}")]
    Decoding(String),

    /// Anything else, carrying the underlying error text.
    #[error("{0}")]
    Other(String),
}

impl InspectError {
    /// Classify a failure of the operation's read step.
    ///
    /// A missing entry at this point is a race with a concurrent removal and
    /// is reported with the underlying message rather than as `NotFound`.
    pub fn classify(error: io::Error) -> Self {
        match error.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied,
            ErrorKind::InvalidData => Self::Decoding(error.to_string()),
            _ => Self::Other(error.to_string()),
        }
    }

    /// Classify a failure of the initial existence probe.
    ///
    /// A missing entry, a file used as a directory component and a symlink
    /// loop all mean there is nothing to inspect.
    pub fn classify_probe(error: io::Error) -> Self {
        if is_unresolvable(&error) {
            Self::NotFound
        } else {
            Self::classify(error)
        }
    }
}

impl From<io::Error> for InspectError {
    fn from(error: io::Error) -> Self {
        Self::classify(error)
    }
}

/// Kind of a filesystem entry. Anything that is not a directory is a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    fn of(metadata: &Metadata) -> Self {
        if metadata.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    fn from_dir_entry(entry: &DirEntry) -> Self {
        // Follows symlinks; a dangling or unreadable target counts as a file.
        let kind = if entry.path().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            kind,
        }
    }
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Metadata snapshot of a single entry.
///
/// Timestamps are seconds since the Unix epoch. `created` is the platform
/// "ctime": on Unix this is the inode change time (last metadata change),
/// not the creation time; elsewhere it is the creation time reported by the
/// OS.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    pub kind: EntryKind,
    pub size_bytes: u64,
    pub modified: f64,
    pub created: f64,
}

impl FileMetadata {
    fn from_metadata(metadata: &Metadata) -> io::Result<Self> {
        Ok(Self {
            kind: EntryKind::of(metadata),
            size_bytes: metadata.len(),
            modified: epoch_seconds(metadata.modified()?),
            created: created_seconds(metadata)?,
        })
    }
}

// ============================================================================
// Operations
// ============================================================================

/// List the direct children of the directory at `path`.
pub fn list_files(path: &str) -> String {
    match list_directory(Path::new(path)) {
        Ok(entries) if entries.is_empty() => messages::render(DIRECTORY_EMPTY, path, ""),
        Ok(entries) => {
            debug!("Listed {} entries", entries.len());
            let mut out = messages::render(LISTING_HEADER, path, "");
            for entry in &entries {
                out.push('\n');
                out.push_str(&entry.to_string());
            }
            out
        }
        Err(e) => {
            warn!(error = ?e, "Listing failed");
            LIST_FILES.render_error(&e, path)
        }
    }
}

/// Read the file at `path` as UTF-8 text.
pub fn read_file(path: &str) -> String {
    match read_text(Path::new(path)) {
        Ok(content) => {
            debug!("Read {} bytes", content.len());
            let mut out = messages::render(CONTENTS_HEADER, path, "");
            out.push('\n');
            out.push_str(&content);
            out
        }
        Err(e) => {
            warn!(error = ?e, "Read failed");
            READ_FILE.render_error(&e, path)
        }
    }
}

/// Describe the file or directory at `path`.
pub fn get_file_info(path: &str) -> String {
    match stat(Path::new(path)) {
        Ok(info) => [
            FILE_INFO_HEADER.to_string(),
            format!("Path: {path}"),
            format!("Type: {}", info.kind),
            format!("Size: {} bytes", info.size_bytes),
            format!("Modified: {}", format_timestamp(info.modified)),
            format!("Created: {}", format_timestamp(info.created)),
        ]
        .join("\n"),
        Err(e) => {
            warn!(error = ?e, "Stat failed");
            GET_FILE_INFO.render_error(&e, path)
        }
    }
}

/// Enumerate a directory, in the order the OS returns entries.
pub fn list_directory(path: &Path) -> Result<Vec<DirectoryEntry>, InspectError> {
    let path = normalize(path);
    let metadata = probe(&path)?;
    if !metadata.is_dir() {
        return Err(InspectError::WrongType);
    }

    fs::read_dir(&path)?
        .map(|entry| Ok(DirectoryEntry::from_dir_entry(&entry?)))
        .collect()
}

/// Read a regular file as UTF-8.
pub fn read_text(path: &Path) -> Result<String, InspectError> {
    let path = normalize(path);
    let metadata = probe(&path)?;
    if !metadata.is_file() {
        return Err(InspectError::WrongType);
    }

    Ok(fs::read_to_string(&path)?)
}

/// Fetch metadata for a file or directory.
pub fn stat(path: &Path) -> Result<FileMetadata, InspectError> {
    let metadata = probe(&normalize(path))?;
    Ok(FileMetadata::from_metadata(&metadata)?)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Rebuild `path` from its components; an empty result is `.`.
fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path.components().collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

fn is_unresolvable(error: &io::Error) -> bool {
    match error.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => true,
        #[cfg(unix)]
        _ if error.raw_os_error() == Some(libc::ELOOP) => true,
        _ => false,
    }
}

fn probe(path: &Path) -> Result<Metadata, InspectError> {
    fs::metadata(path).map_err(InspectError::classify_probe)
}

fn epoch_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}

#[cfg(unix)]
fn created_seconds(metadata: &Metadata) -> io::Result<f64> {
    use std::os::unix::fs::MetadataExt;

    Ok(metadata.ctime() as f64 + metadata.ctime_nsec() as f64 / 1e9)
}

#[cfg(not(unix))]
fn created_seconds(metadata: &Metadata) -> io::Result<f64> {
    metadata.created().map(epoch_seconds)
}

/// Decimal seconds, always with a fractional part.
fn format_timestamp(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{secs:.1}")
    } else {
        format!("{secs}")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_missing_path_each_operation() {
        let temp_dir = TempDir::new().unwrap();
        let missing = path_str(&temp_dir.path().join("nope"));

        assert_eq!(list_files(&missing), format!("Directory not found: {missing}"));
        assert_eq!(read_file(&missing), format!("File not found: {missing}"));
        assert_eq!(get_file_info(&missing), format!("Path not found: {missing}"));
    }

    #[test]
    fn test_missing_parent_component_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let below_file = path_str(&file.join("child"));

        assert_eq!(read_file(&below_file), format!("File not found: {below_file}"));
    }

    #[test]
    fn test_empty_path_is_current_directory() {
        assert!(list_files("").starts_with("Files in :\n"));
        assert_eq!(read_file(""), "Path is not a file: ");
        assert!(get_file_info("").contains("Type: directory"));
    }

    #[test]
    fn test_trailing_separator_and_dot_components() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "hello").unwrap();
        let dir = path_str(temp_dir.path());

        let trailing = format!("{dir}/notes.txt/");
        assert_eq!(read_file(&trailing), format!("Contents of {trailing}:\nhello"));

        let dotted = format!("{dir}/./notes.txt");
        assert!(get_file_info(&dotted).contains(&format!("Path: {dotted}\nType: file")));

        let dir_slash = format!("{dir}//");
        assert_eq!(list_files(&dir_slash), format!("Files in {dir_slash}:\nnotes.txt (file)"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("")), PathBuf::from("."));
        assert_eq!(normalize(Path::new("a/./b//")), PathBuf::from("a/b"));
        assert_eq!(normalize(Path::new("/tmp/x/")), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("notes.txt");
        fs::write(&file, "hello").unwrap();
        let p = path_str(&file);

        assert_eq!(list_files(&p), format!("Path is not a directory: {p}"));
        assert_eq!(read_file(&p), format!("Contents of {p}:\nhello"));
        assert!(get_file_info(&p).contains("Type: file"));
    }

    #[test]
    fn test_directory_path() {
        let temp_dir = TempDir::new().unwrap();
        let p = path_str(temp_dir.path());

        assert_eq!(read_file(&p), format!("Path is not a file: {p}"));
        assert_eq!(list_files(&p), format!("Directory is empty: {p}"));
        assert!(get_file_info(&p).contains("Type: directory"));
    }

    #[test]
    fn test_listing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("b")).unwrap();
        let p = path_str(temp_dir.path());

        let text = list_files(&p);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(format!("Files in {p}:").as_str()));

        let mut rest: Vec<_> = lines.collect();
        rest.sort();
        assert_eq!(rest, vec!["a.txt (file)", "b (directory)"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_listing_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("real")).unwrap();
        symlink(temp_dir.path().join("real"), temp_dir.path().join("link")).unwrap();
        symlink(temp_dir.path().join("gone"), temp_dir.path().join("dangling")).unwrap();

        let entries = list_directory(temp_dir.path()).unwrap();
        let kind_of = |name: &str| entries.iter().find(|e| e.name == name).map(|e| e.kind);

        assert_eq!(kind_of("link"), Some(EntryKind::Directory));
        assert_eq!(kind_of("dangling"), Some(EntryKind::File));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_not_found() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let looped = temp_dir.path().join("a");
        symlink(&looped, &looped).unwrap();
        let p = path_str(&looped);

        assert_eq!(list_files(&p), format!("Directory not found: {p}"));
        assert_eq!(read_file(&p), format!("File not found: {p}"));
        assert_eq!(get_file_info(&p), format!("Path not found: {p}"));

        let eloop = io::Error::from_raw_os_error(libc::ELOOP);
        assert_eq!(InspectError::classify_probe(eloop), InspectError::NotFound);
    }

    #[test]
    fn test_read_exact_content() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("crlf.txt");
        let content = "  line one\r\nline two\n\n";
        fs::write(&file, content).unwrap();
        let p = path_str(&file);

        assert_eq!(read_file(&p), format!("Contents of {p}:\n{content}"));
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("empty.txt");
        fs::write(&file, "").unwrap();
        let p = path_str(&file);

        assert_eq!(read_file(&p), format!("Contents of {p}:\n"));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("blob.bin");
        fs::write(&file, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let p = path_str(&file);

        assert_eq!(
            read_file(&p),
            format!("File is not text or uses unsupported encoding: {p}")
        );
        assert!(matches!(read_text(&file), Err(InspectError::Decoding(_))));
    }

    #[test]
    fn test_file_info_layout() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("sized.txt");
        fs::write(&file, "12345").unwrap();
        let p = path_str(&file);

        let text = get_file_info(&p);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "File Info:");
        assert_eq!(lines[1], format!("Path: {p}"));
        assert_eq!(lines[2], "Type: file");
        assert_eq!(lines[3], "Size: 5 bytes");
        assert!(lines[4].starts_with("Modified: "));
        assert!(lines[5].starts_with("Created: "));

        let modified: f64 = lines[4]["Modified: ".len()..].parse().unwrap();
        assert!(modified > 0.0);
    }

    #[test]
    fn test_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        let p = path_str(temp_dir.path());
        let f = path_str(&temp_dir.path().join("a.txt"));

        assert_eq!(list_files(&p), list_files(&p));
        assert_eq!(read_file(&f), read_file(&f));
        assert_eq!(get_file_info(&f), get_file_info(&f));
    }

    #[test]
    fn test_classify() {
        let denied = io::Error::new(ErrorKind::PermissionDenied, "nope");
        assert_eq!(InspectError::classify(denied), InspectError::PermissionDenied);

        let gone = io::Error::new(ErrorKind::NotFound, "gone");
        assert_eq!(
            InspectError::classify(gone),
            InspectError::Other("gone".to_string())
        );

        let gone = io::Error::new(ErrorKind::NotFound, "gone");
        assert_eq!(InspectError::classify_probe(gone), InspectError::NotFound);

        let other = io::Error::other("device fault");
        assert_eq!(
            InspectError::classify_probe(other),
            InspectError::Other("device fault".to_string())
        );
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1700000000.0), "1700000000.0");
        assert_eq!(format_timestamp(1700000000.5), "1700000000.5");
        assert_eq!(format_timestamp(-1.25), "-1.25");
    }

    #[cfg(unix)]
    mod permissions {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        // Root bypasses permission bits, so denial cannot be induced.
        fn running_as_root() -> bool {
            use std::os::unix::fs::MetadataExt;
            fs::metadata("/proc/self")
                .map(|m| m.uid() == 0)
                .unwrap_or(false)
        }

        #[test]
        fn test_permission_denied_each_operation() {
            if running_as_root() {
                return;
            }

            let temp_dir = TempDir::new().unwrap();
            let locked = temp_dir.path().join("locked");
            fs::create_dir(&locked).unwrap();
            let secret = temp_dir.path().join("secret.txt");
            fs::write(&secret, "shh").unwrap();

            fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
            fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();

            let locked_str = path_str(&locked);
            let secret_str = path_str(&secret);
            let inside = path_str(&locked.join("child"));

            assert_eq!(
                list_files(&locked_str),
                format!("Permission denied accessing: {locked_str}")
            );
            assert_eq!(
                read_file(&secret_str),
                format!("Permission denied reading: {secret_str}")
            );
            assert_eq!(
                get_file_info(&inside),
                format!("Permission denied accessing: {inside}")
            );

            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            fs::set_permissions(&secret, fs::Permissions::from_mode(0o644)).unwrap();
        }
    }
}
