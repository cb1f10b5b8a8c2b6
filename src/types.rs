use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single file discovered during the scan.
///
/// Entries carry metadata only; content is read lazily when the document is
/// bundled, so a file that becomes unreadable between scan and bundle degrades
/// to an inline placeholder instead of failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full path to the file.
    pub path: PathBuf,
    /// The path relative to the scan root.
    pub rel_path: PathBuf,
    /// The size of the file in bytes at scan time.
    pub size: u64,
    /// Lower-cased extension without the leading dot; empty if none.
    pub extension: String,
}

/// The ordered result of scanning a directory.
///
/// Files are sorted lexically by relative path, so tree rendering and
/// bundling over the same snapshot always produce identical output.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// The root directory that was scanned.
    pub root: PathBuf,
    /// All files that passed the filter, in lexical relative-path order.
    pub files: Vec<FileEntry>,
}
