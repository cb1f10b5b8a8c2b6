use crate::error::SnapfoldError;
use crate::filter::{self, FilterPolicy};
use crate::options::SnapfoldOptions;
use crate::types::{FileEntry, Snapshot};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, policy: &FilterPolicy) -> Self {
        let mut builder = WalkBuilder::new(root);
        // Every regular file is a candidate; only the explicit ignore set
        // prunes the walk. Hidden files and VCS ignore files get no special
        // treatment.
        builder
            .hidden(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .ignore(false)
            .follow_links(false);
        let matcher = policy.clone();
        let walk_root = root.to_path_buf();
        builder.filter_entry(move |entry| {
            let rel = entry.path().strip_prefix(&walk_root).unwrap_or(entry.path());
            !matcher.is_ignored(rel)
        });
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, SnapfoldError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => Some(Ok(entry.path().to_path_buf())),
            Err(e) => Some(Err(SnapfoldError::Walk(e.to_string()))),
        })
    }
}
/// Walks `options.root` and collects every regular file that passes the
/// filter, sorted lexically by relative path.
///
/// Unreadable subtrees and files whose metadata cannot be read are skipped;
/// only a missing or non-directory root is a hard failure.
pub fn scan(options: &SnapfoldOptions) -> Result<Snapshot, SnapfoldError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Scanning root: {}", options.root.display());
    if !options.root.is_dir() {
        return Err(SnapfoldError::InvalidRoot(options.root.clone()));
    }
    let policy = FilterPolicy::from_options(options);
    let walker = Walker::new(&options.root, &policy);
    let mut files = Vec::new();
    for result in walker.into_iter() {
        let path = match result {
            Ok(p) => p,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping unreadable entry: {}", _e);
                continue;
            }
        };
        // Symlinks and other non-regular entries never become entries.
        let metadata = match fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping {}: {}", path.display(), _e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        let rel_path = path
            .strip_prefix(&options.root)
            .unwrap_or(&path)
            .to_path_buf();
        if !policy.includes(&rel_path, metadata.len()) {
            continue;
        }
        files.push(FileEntry {
            extension: filter::extension_of(&path),
            path,
            rel_path,
            size: metadata.len(),
        });
    }
    // Filesystem enumeration order is not stable across runs; sorting makes
    // the tree and the bundled document reproducible.
    files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    #[cfg(feature = "logging")]
    tracing::debug!("Collected {} files", files.len());
    Ok(Snapshot {
        root: options.root.clone(),
        files,
    })
}
