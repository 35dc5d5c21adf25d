//! Pipeline driver for ginger.
//!
//! A run reads the project description, walks the source tree, validates
//! the resulting context and writes the ninja file. The first failing phase
//! aborts the run.

mod error;

pub use error::DriverError;

use ginger_build::BuildContext;
use std::path::PathBuf;
use tracing::{debug, info};

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;

/// Input and output locations for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// Project description to read.
    pub description: PathBuf,

    /// Ninja file to write.
    pub output: PathBuf,

    /// Directory walked for sources and headers.
    pub root: String,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            description: PathBuf::from("build.ginger"),
            output: PathBuf::from("build.ninja"),
            root: ".".to_string(),
        }
    }
}

/// Driver that sequences the generation pipeline.
pub struct Driver {
    options: DriverOptions,
}

impl Driver {
    pub fn new(options: DriverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// Build and validate the context without writing anything.
    pub fn plan(&self) -> Result<BuildContext> {
        let context =
            ginger_build::read_description(&self.options.description, BuildContext::default())?;
        debug!(
            compiler = %context.compiler,
            linker = %context.linker,
            target = %context.target,
            "description parsed"
        );

        let tree = ginger_build::scan(&self.options.root)?;
        let context = context.with_source_tree(tree);

        context.validate()?;
        debug!(sources = context.source_files.len(), "context validated");

        Ok(context)
    }

    /// Plan and return the rendered ninja document.
    pub fn render(&self) -> Result<String> {
        let context = self.plan()?;
        Ok(ginger_ninja::render(&context))
    }

    /// Plan and write the ninja file.
    pub fn run(&self) -> Result<BuildContext> {
        let context = self.plan()?;

        ginger_ninja::write_file(&self.options.output, &context)?;
        info!(
            output = %self.options.output.display(),
            sources = context.source_files.len(),
            include_paths = context.include_paths.len(),
            "generation complete"
        );

        Ok(context)
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DriverOptions::default())
    }
}
