//! Error types for ginger-build.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for ginger-build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while assembling a build context.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Failed to open or read the project description.
    #[error("open {}: {source}", path.display())]
    ReadDescription {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list a directory during the source tree walk.
    #[error("read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `-cc` directive was given.
    #[error("invalid ginger file: -cc not defined")]
    MissingCompiler,

    /// No `-ll` directive was given.
    #[error("invalid ginger file: -ll not defined")]
    MissingLinker,

    /// The walk found nothing to compile.
    #[error("no source files detected")]
    NoSourceFiles,
}

impl BuildError {
    /// Whether this error comes from the filesystem rather than the
    /// contents of the description.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            BuildError::ReadDescription { .. } | BuildError::ReadDir { .. }
        )
    }
}
