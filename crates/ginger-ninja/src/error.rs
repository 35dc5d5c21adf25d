//! Error types for ginger-ninja.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for ginger-ninja operations.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors that can occur while writing a ninja file.
#[derive(Error, Debug)]
pub enum EmitError {
    /// Failed to create or write the destination.
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
