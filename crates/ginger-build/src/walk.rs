//! Source tree classification.
//!
//! Walks a directory depth-first and sorts its files into compile units
//! and include directories.

use crate::context::{contains_path, SourceFile};
use crate::error::{BuildError, Result};
use std::path::{Path, MAIN_SEPARATOR};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Extensions compiled into objects.
pub const SOURCE_EXTENSIONS: &[&str] = &[".c", ".cpp"];

/// Extensions that make their directory an include path.
pub const HEADER_EXTENSIONS: &[&str] = &[".h"];

/// Result of walking a source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTree {
    /// Compile units in traversal order.
    pub sources: Vec<SourceFile>,

    /// Directories holding at least one header, in discovery order.
    pub include_paths: Vec<String>,
}

/// Walk `root` recursively.
///
/// Entries of each directory are visited in file name order. Subdirectories
/// are walked as soon as they are reached; symbolic links are never followed.
/// The first unreadable entry aborts the walk.
pub fn scan(root: &str) -> Result<SourceTree> {
    let mut tree = SourceTree::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|err| BuildError::ReadDir {
            path: err.path().unwrap_or(Path::new(root)).to_path_buf(),
            source: err.into(),
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let (stem, extension) = split_extension(&file_name);
        let dir = entry.path().parent().unwrap_or(Path::new(root));
        let dir = dir.to_string_lossy();

        if SOURCE_EXTENSIONS.contains(&extension) {
            trace!(dir = %dir, file = %file_name, "source file");
            tree.sources.push(SourceFile::new(
                stem,
                format!("{dir}{MAIN_SEPARATOR}"),
                extension,
            ));
        } else if HEADER_EXTENSIONS.contains(&extension)
            && !contains_path(&tree.include_paths, &dir)
        {
            debug!(dir = %dir, header = %file_name, "include path");
            tree.include_paths.push(dir.into_owned());
        }
    }

    debug!(
        root,
        sources = tree.sources.len(),
        include_paths = tree.include_paths.len(),
        "source tree scanned"
    );

    Ok(tree)
}

/// Split a file name at its last dot. The extension keeps the dot and is
/// empty when there is none.
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(index) => file_name.split_at(index),
        None => (file_name, ""),
    }
}
