//! Context validation, run after parsing and walking.

use crate::context::BuildContext;
use crate::error::{BuildError, Result};
use tracing::debug;

impl BuildContext {
    /// Check the mandatory fields.
    ///
    /// `target`, `build_directory` and the flag lists are not checked.
    pub fn validate(&self) -> Result<()> {
        if self.compiler.is_empty() {
            return Err(BuildError::MissingCompiler);
        }
        if self.linker.is_empty() {
            return Err(BuildError::MissingLinker);
        }
        if self.source_files.is_empty() {
            return Err(BuildError::NoSourceFiles);
        }

        if self.target.is_empty() {
            debug!("no -target defined, link edge will have an empty output name");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SourceFile;

    fn complete() -> BuildContext {
        BuildContext {
            compiler: "cc".to_string(),
            compiler_flags: vec!["-Wall".to_string()],
            linker: "cc".to_string(),
            linker_flags: vec!["-lm".to_string()],
            source_files: vec![SourceFile::new("a", "./", ".c")],
            include_paths: vec![".".to_string()],
            target: "app".to_string(),
            ..BuildContext::default()
        }
    }

    #[test]
    fn test_complete_context_is_valid() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_missing_compiler() {
        let context = BuildContext {
            compiler: String::new(),
            ..complete()
        };

        let err = context.validate().unwrap_err();
        assert!(matches!(err, BuildError::MissingCompiler));
        assert_eq!(err.to_string(), "invalid ginger file: -cc not defined");
    }

    #[test]
    fn test_missing_linker() {
        let context = BuildContext {
            linker: String::new(),
            ..complete()
        };

        let err = context.validate().unwrap_err();
        assert!(matches!(err, BuildError::MissingLinker));
        assert_eq!(err.to_string(), "invalid ginger file: -ll not defined");
    }

    #[test]
    fn test_compiler_checked_before_linker() {
        let context = BuildContext {
            source_files: vec![SourceFile::new("a", "./", ".c")],
            ..BuildContext::default()
        };

        assert!(matches!(context.validate(), Err(BuildError::MissingCompiler)));
    }

    #[test]
    fn test_no_source_files() {
        let context = BuildContext {
            source_files: Vec::new(),
            ..complete()
        };

        let err = context.validate().unwrap_err();
        assert!(matches!(err, BuildError::NoSourceFiles));
        assert!(!err.is_io());
    }

    #[test]
    fn test_optional_fields_not_checked() {
        let context = BuildContext {
            build_directory: String::new(),
            target: String::new(),
            compiler_flags: Vec::new(),
            linker_flags: Vec::new(),
            include_paths: Vec::new(),
            ..complete()
        };

        assert!(context.validate().is_ok());
    }
}
