//! Ninja build file generation.
//!
//! Turns a validated [`BuildContext`] into a `build.ninja` document with one
//! `compile` edge per source file, a single `link` edge producing `$target`,
//! and a `default $target` declaration.

mod codegen;
mod error;

pub use codegen::{NinjaGen, COMPILE_COMMAND, LINK_COMMAND};
pub use error::{EmitError, Result};

use ginger_build::BuildContext;
use std::path::Path;
use tracing::info;

/// Render the ninja document for `context`.
pub fn render(context: &BuildContext) -> String {
    NinjaGen::new().generate(context)
}

/// Render `context` and replace the contents of `path` with it.
///
/// The document is rendered in memory first; a failed write may still
/// leave the destination truncated.
pub fn write_file(path: &Path, context: &BuildContext) -> Result<()> {
    let document = render(context);

    std::fs::write(path, &document).map_err(|source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        edges = context.source_files.len() + 1,
        "wrote ninja file"
    );

    Ok(())
}
