use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for auto_extract operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Scan root is missing or not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Extraction tool was not found in any PATH entry
    #[error("{name} not found in the system path")]
    ToolNotFound { name: String },

    /// Tool was located but could not be started
    #[error("failed to run {}: {source}", .tool.display())]
    Spawn {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Marker file could not be written after extraction
    #[error("failed to create marker file {}: {source}", .path.display())]
    Marker {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
