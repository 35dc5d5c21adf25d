//! Build context record (what a ninja file is generated from).

use crate::walk::SourceTree;

/// A compilable unit discovered during the source tree walk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFile {
    /// File name without its extension.
    pub name: String,

    /// Directory containing the file, with a trailing separator.
    pub path: String,

    /// The compilable extension, including the leading dot.
    pub extension: String,
}

impl SourceFile {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Path of the source file as passed to the compiler.
    pub fn input_path(&self) -> String {
        format!("{}{}{}", self.path, self.name, self.extension)
    }

    /// Object file path relative to the build directory.
    ///
    /// A single leading `.` of the directory is dropped so that `./src/`
    /// becomes `/src/` and can be appended to `$builddir`.
    pub fn object_path(&self) -> String {
        let dir = self.path.strip_prefix('.').unwrap_or(&self.path);
        format!("{}{}.o", dir, self.name)
    }
}

/// Everything needed to emit a build graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Value of `$builddir` (default: `.`).
    pub build_directory: String,

    /// Compiler command. Empty means unset.
    pub compiler: String,

    /// Compiler flags in directive order.
    pub compiler_flags: Vec<String>,

    /// Linker command. Empty means unset.
    pub linker: String,

    /// Linker flags in directive order.
    pub linker_flags: Vec<String>,

    /// Compile units in traversal order.
    pub source_files: Vec<SourceFile>,

    /// Header directories in discovery order, unique ignoring case.
    pub include_paths: Vec<String>,

    /// Name of the linked artifact.
    pub target: String,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            build_directory: ".".to_string(),
            compiler: String::new(),
            compiler_flags: Vec::new(),
            linker: String::new(),
            linker_flags: Vec::new(),
            source_files: Vec::new(),
            include_paths: Vec::new(),
            target: String::new(),
        }
    }
}

impl BuildContext {
    /// Merge the result of a source tree walk into the context.
    pub fn with_source_tree(mut self, tree: SourceTree) -> Self {
        self.source_files.extend(tree.sources);

        for path in tree.include_paths {
            if !contains_path(&self.include_paths, &path) {
                self.include_paths.push(path);
            }
        }

        self
    }
}

/// Case-insensitive membership test for include directories.
pub(crate) fn contains_path(include_paths: &[String], path: &str) -> bool {
    let path = path.to_lowercase();
    include_paths.iter().any(|p| p.to_lowercase() == path)
}
