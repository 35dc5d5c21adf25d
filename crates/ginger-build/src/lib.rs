//! Build context assembly for ginger.
//!
//! This crate provides:
//! - The `BuildContext` record and its `SourceFile` entries
//! - Project description (`build.ginger`) parsing
//! - Source tree classification into compile units and include paths
//! - Validation of the populated context
//!
//! # Example
//!
//! ```text
//! # build.ginger
//! -builddir out
//! -cc clang
//! -cf -Wall
//! -cf -O2
//! -ll clang
//! -lf -lm
//! -target app
//! ```

mod context;
mod directive;
mod error;
mod validate;
mod walk;

pub use context::{BuildContext, SourceFile};
pub use directive::{parse_description, parse_line, read_description, Directive};
pub use error::{BuildError, Result};
pub use walk::{scan, SourceTree, HEADER_EXTENSIONS, SOURCE_EXTENSIONS};
