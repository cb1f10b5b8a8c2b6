//! Document assembly and output-path resolution.
//!
//! Bundling is pure string building over an ordered [`Snapshot`]; the only
//! filesystem work here is reading file contents (failures degrade to inline
//! placeholders) and resolving/writing the destination path.

use crate::error::SnapfoldError;
use crate::options::{NamingMode, SnapfoldOptions};
use crate::tree::render_tree;
use crate::types::Snapshot;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Composes the full markdown document for a snapshot.
///
/// Layout: title, generation timestamp, the optional tree overview fenced as
/// a literal block, then one fenced section per file in snapshot order. A
/// file that cannot be read or is not valid UTF-8 contributes an error
/// placeholder instead of aborting; remaining files still appear.
pub fn bundle(snapshot: &Snapshot, options: &SnapfoldOptions) -> String {
    let mut md = String::with_capacity(1024);
    md.push_str("# 📦 SnapFold Project Snapshot\n\n");
    md.push_str(&format!(
        "**Generated:** {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    if options.include_tree {
        md.push_str("## 📁 Project Structure\n");
        md.push_str("```\n");
        md.push_str(&render_tree(&snapshot.files));
        md.push_str("```\n\n");
    }

    for file in &snapshot.files {
        md.push_str(&format!(
            "---\n### `{}`\n```{}\n",
            file.rel_path.display(),
            file.extension
        ));
        let content = match fs::read(&file.path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(e) => format!("[Error reading file: {}]", e.utf8_error()),
            },
            Err(e) => format!("[Error reading file: {e}]"),
        };
        md.push_str(&content);
        md.push_str("\n```\n\n");
    }

    md
}

/// Resolves the destination path for the document under the configured
/// naming mode, creating the destination folder if absent.
///
/// `timestamp` encodes the current minute (same-minute resolutions collide
/// and overwrite); `increment` probes `name.md`, `name(2).md`, `name(3).md`,
/// … until an unused path is found; `overwrite` returns the configured path
/// unconditionally.
pub fn resolve_output_path(
    output: &Path,
    naming_mode: NamingMode,
) -> Result<PathBuf, SnapfoldError> {
    let folder = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let folder =
        std::path::absolute(&folder).map_err(|e| SnapfoldError::output(&folder, e))?;
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("SnapFold")
        .to_string();
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_else(|| ".md".to_string());

    fs::create_dir_all(&folder).map_err(|e| SnapfoldError::output(&folder, e))?;

    let path = match naming_mode {
        NamingMode::Timestamp => {
            let ts = Local::now().format("%Y-%m-%d_%H-%M");
            folder.join(format!("{stem}-{ts}{ext}"))
        }
        NamingMode::Increment => {
            let mut candidate = folder.join(format!("{stem}{ext}"));
            let mut i = 1;
            while candidate.exists() {
                i += 1;
                candidate = folder.join(format!("{stem}({i}){ext}"));
            }
            candidate
        }
        NamingMode::Overwrite => folder.join(format!("{stem}{ext}")),
    };
    Ok(path)
}

/// Writes the bundled document to its resolved destination.
pub fn write_document(path: &Path, document: &str) -> Result<(), SnapfoldError> {
    fs::write(path, document).map_err(|e| SnapfoldError::output(path, e))
}
