//! Inclusion rules applied to every discovered file.

use crate::options::SnapfoldOptions;
use std::collections::HashSet;
use std::path::Path;

/// Decides whether a candidate file belongs in the snapshot.
///
/// Rules are applied in order, first match wins: ignore names (matched
/// case-sensitively against every path component), then the size ceiling,
/// then the extension allow-list when it is enabled.
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    ignore: HashSet<String>,
    max_file_size: u64,
    only_formats: HashSet<String>,
    enable_only_formats: bool,
}

impl FilterPolicy {
    pub fn new(
        ignore: impl IntoIterator<Item = String>,
        max_file_size: u64,
        only_formats: impl IntoIterator<Item = String>,
        enable_only_formats: bool,
    ) -> Self {
        Self {
            ignore: ignore.into_iter().collect(),
            max_file_size,
            only_formats: only_formats
                .into_iter()
                .map(|f| f.to_lowercase())
                .collect(),
            enable_only_formats,
        }
    }

    pub fn from_options(options: &SnapfoldOptions) -> Self {
        Self::new(
            options.ignore.iter().cloned(),
            options.max_file_size,
            options.only_formats.iter().cloned(),
            options.enable_only_formats,
        )
    }

    /// True if any component of `path` is an ignored name.
    pub fn is_ignored(&self, path: &Path) -> bool {
        path.components().any(|c| {
            c.as_os_str()
                .to_str()
                .map(|name| self.ignore.contains(name))
                .unwrap_or(false)
        })
    }

    /// Full inclusion check for a file at `path` with the given byte size.
    ///
    /// `path` may be absolute or root-relative; ignore names are matched
    /// against whichever components it carries, so callers pass the
    /// root-relative path for predictable matching.
    pub fn includes(&self, path: &Path, size: u64) -> bool {
        if self.is_ignored(path) {
            return false;
        }
        if size > self.max_file_size {
            return false;
        }
        if self.enable_only_formats && !self.only_formats.contains(&extension_of(path)) {
            return false;
        }
        true
    }
}

/// Lower-cased extension without the leading dot; empty string if none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}
