//! Driver error type.

use ginger_build::BuildError;
use ginger_ninja::EmitError;
use miette::Diagnostic;
use thiserror::Error;

/// First error raised by any phase of a run.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl Diagnostic for DriverError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            DriverError::Build(e) if e.is_io() => "ginger::io",
            DriverError::Build(_) => "ginger::config",
            DriverError::Emit(_) => "ginger::emit",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let help = match self {
            DriverError::Build(BuildError::MissingCompiler) => {
                "add a `-cc <compiler>` line to the ginger file"
            }
            DriverError::Build(BuildError::MissingLinker) => {
                "add a `-ll <linker>` line to the ginger file"
            }
            DriverError::Build(BuildError::NoSourceFiles) => {
                "run ginger from the project root; only .c and .cpp files are compiled"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}
