//! # Snapfold
//!
//! `snapfold` is a library for bundling a directory tree into a single
//! markdown snapshot: it recursively scans a root, filters files by ignore
//! names, size, and extension, renders an optional tree overview, and
//! concatenates every file's contents into one fenced, shareable document.
//!
//! The scan is single-threaded and deterministic: entries are sorted
//! lexically by relative path, so the same directory snapshot always yields
//! byte-identical tree and section ordering.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use snapfold::{NamingMode, SnapfoldBuilder, snapfold};
//!
//! let options = SnapfoldBuilder::new(".")
//!     .ignore(vec!["node_modules".into(), ".git".into()])
//!     .max_file_size(2 * 1024 * 1024) // 2 MB
//!     .include_tree(true)
//!     .naming_mode(NamingMode::Increment)
//!     .build();
//!
//! let saved = snapfold(&options).expect("Failed to bundle directory");
//! println!("Snapshot saved to {}", saved.display());
//! ```

pub mod config;
mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::scan;
pub use error::SnapfoldError;
pub use filter::FilterPolicy;
pub use options::{NamingMode, SnapfoldBuilder, SnapfoldOptions};
pub use output::{bundle, resolve_output_path, write_document};
pub use tree::render_tree;
pub use types::{FileEntry, Snapshot};

use std::path::PathBuf;

/// Runs the whole pipeline: scan, bundle, resolve the destination, write.
///
/// Returns the path the document was saved to. Failures on individual files
/// never abort the run; only an invalid root or an unwritable destination do.
pub fn snapfold(options: &SnapfoldOptions) -> Result<PathBuf, SnapfoldError> {
    let snapshot = scan(options)?;
    let document = bundle(&snapshot, options);
    let path = resolve_output_path(&options.output, options.naming_mode)?;
    write_document(&path, &document)?;
    Ok(path)
}
