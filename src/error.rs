use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SnapfoldError {
    #[error("Invalid root {0}: not an existing directory")]
    InvalidRoot(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl SnapfoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapfoldError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapfoldError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
