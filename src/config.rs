//! `snapfold.config` parsing.
//!
//! The config file is a flat `key = value` format with `#`/`;` comments.
//! Values are coerced once at this boundary: `true`/`false` to booleans,
//! sizes with an optional `kb`/`mb`/`gb` suffix to bytes, comma-separated
//! values to lists. The rest of the crate only ever sees the typed
//! [`SnapfoldOptions`].

use crate::error::SnapfoldError;
use crate::options::{NamingMode, SnapfoldOptions};
use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// The conventional config file name next to the project being scanned.
pub const CONFIG_FILE: &str = "snapfold.config";

const DEFAULT_CONFIG: &str = "\
# SnapFold configuration file
# Default configuration is safe and optimized for most projects.
# Edit values as needed. Save and rerun SnapFold.

input = .
output = SnapFold.md
format = md

# Folders or files to ignore (comma-separated)
ignore = node_modules, .git

# Maximum file size to include (supports MB/KB)
max_file_size = 2MB

# Limit to these file types only (set enable_only_formats = true to activate)
only_formats = html, css, js
enable_only_formats = false

# Include tree overview at top of file
include_tree = true

# Output file naming method: timestamp | increment | overwrite
naming_mode = increment
";

/// Writes the default config file at `path` unless one already exists.
/// Returns whether a file was created.
pub fn write_default_config(path: &Path) -> Result<bool, SnapfoldError> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, DEFAULT_CONFIG).map_err(|e| SnapfoldError::io(path, e))?;
    Ok(true)
}

/// Loads options from a config file, falling back to defaults for any key
/// the file does not set. A missing file yields plain defaults.
pub fn load_config(path: &Path) -> Result<SnapfoldOptions, SnapfoldError> {
    let mut options = SnapfoldOptions::default();
    if !path.exists() {
        return Ok(options);
    }
    let text = fs::read_to_string(path).map_err(|e| SnapfoldError::io(path, e))?;
    apply_config(&mut options, &text);
    Ok(options)
}

fn apply_config(options: &mut SnapfoldOptions, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        match key {
            "input" => options.root = value.into(),
            "output" => options.output = value.into(),
            "format" => options.format = value.to_string(),
            "ignore" => options.ignore = parse_list(value),
            "max_file_size" => {
                if let Some(bytes) = parse_size(value) {
                    options.max_file_size = bytes;
                }
            }
            "only_formats" => options.only_formats = parse_list(value),
            "enable_only_formats" => {
                if let Some(flag) = parse_bool(value) {
                    options.enable_only_formats = flag;
                }
            }
            "include_tree" => {
                if let Some(flag) = parse_bool(value) {
                    options.include_tree = flag;
                }
            }
            "naming_mode" => options.naming_mode = NamingMode::parse(value),
            _other => {
                #[cfg(feature = "logging")]
                tracing::warn!("Ignoring unknown config key: {}", _other);
            }
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Parses a human-readable size like `2MB`, `512 kb`, or `1048576`.
fn parse_size(value: &str) -> Option<u64> {
    let lower = value.to_lowercase();
    let trimmed = lower.trim();
    let split = trimmed
        .find(|c: char| c != '.' && !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (num, unit) = trimmed.split_at(split);
    let num: f64 = num.trim().parse().ok()?;
    let mult = match unit.trim() {
        "" => 1.0,
        "kb" => 1024.0,
        "mb" => 1024.0 * 1024.0,
        "gb" => 1024.0 * 1024.0 * 1024.0,
        _ => return None,
    };
    Some((num * mult) as u64)
}
