//! Project description (`build.ginger`) parsing.
//!
//! One directive per line: a keyword, a single space, then the argument.
//! Blank lines, `#` comments, lines without an argument and unknown keywords
//! are skipped without error.

use crate::context::BuildContext;
use crate::error::{BuildError, Result};
use std::path::Path;
use tracing::{debug, trace};

/// A recognized directive keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `-builddir`: build directory (last one wins).
    BuildDir,
    /// `-cc`: compiler command (last one wins).
    Compiler,
    /// `-cf`: compiler flag (accumulates).
    CompilerFlag,
    /// `-ll`: linker command (last one wins).
    Linker,
    /// `-lf`: linker flag (accumulates).
    LinkerFlag,
    /// `-target`: output artifact name (last one wins).
    Target,
}

impl Directive {
    /// Every directive, in documentation order.
    pub const ALL: [Directive; 6] = [
        Directive::BuildDir,
        Directive::Compiler,
        Directive::CompilerFlag,
        Directive::Linker,
        Directive::LinkerFlag,
        Directive::Target,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Directive::BuildDir => "-builddir",
            Directive::Compiler => "-cc",
            Directive::CompilerFlag => "-cf",
            Directive::Linker => "-ll",
            Directive::LinkerFlag => "-lf",
            Directive::Target => "-target",
        }
    }

    /// Look up a keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.keyword().eq_ignore_ascii_case(keyword))
    }
}

/// Split a description line into its directive and argument.
///
/// The argument is everything after `"<keyword> "`, untrimmed.
pub fn parse_line(line: &str) -> Option<(Directive, &str)> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (keyword, argument) = line.split_once(' ')?;

    match Directive::from_keyword(keyword) {
        Some(directive) => Some((directive, argument)),
        None => {
            trace!(keyword, "ignoring unknown directive");
            None
        }
    }
}

impl BuildContext {
    /// Apply one directive to the context.
    pub fn apply(mut self, directive: Directive, argument: &str) -> Self {
        let argument = argument.to_string();

        match directive {
            Directive::BuildDir => self.build_directory = argument,
            Directive::Compiler => self.compiler = argument,
            Directive::CompilerFlag => self.compiler_flags.push(argument),
            Directive::Linker => self.linker = argument,
            Directive::LinkerFlag => self.linker_flags.push(argument),
            Directive::Target => self.target = argument,
        }

        self
    }
}

/// Apply every directive in `text` to `context`, in order.
pub fn parse_description(text: &str, context: BuildContext) -> BuildContext {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .fold(context, |context, (index, line)| match parse_line(line) {
            Some((directive, argument)) => context.apply(directive, argument),
            None => {
                trace!(line = index + 1, "skipping line");
                context
            }
        })
}

/// Read a project description from disk and apply it to `context`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_description(path: &Path, context: BuildContext) -> Result<BuildContext> {
    let bytes = std::fs::read(path).map_err(|source| BuildError::ReadDescription {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    debug!(path = %path.display(), bytes = text.len(), "parsing project description");

    Ok(parse_description(&text, context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(text: &str) -> BuildContext {
        parse_description(text, BuildContext::default())
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(Directive::from_keyword("-CC"), Some(Directive::Compiler));
        assert_eq!(Directive::from_keyword("-BuildDir"), Some(Directive::BuildDir));
        assert_eq!(Directive::from_keyword("-Target"), Some(Directive::Target));
        assert_eq!(Directive::from_keyword("cc"), None);
    }

    #[test]
    fn test_keyword_round_trip() {
        for directive in Directive::ALL {
            assert_eq!(Directive::from_keyword(directive.keyword()), Some(directive));
        }
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("-cc gcc"), Some((Directive::Compiler, "gcc")));
        assert_eq!(
            parse_line("-cf -I /opt/include -DX=1"),
            Some((Directive::CompilerFlag, "-I /opt/include -DX=1"))
        );
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("# -cc gcc"), None);
        assert_eq!(parse_line("-cc"), None);
        assert_eq!(parse_line("-unknown value"), None);
    }

    #[test]
    fn test_argument_is_not_trimmed() {
        assert_eq!(parse_line("-cc  gcc "), Some((Directive::Compiler, " gcc ")));
        assert_eq!(parse_line("-target "), Some((Directive::Target, "")));
        // Tabs do not separate the keyword.
        assert_eq!(parse_line("-cc\tgcc"), None);
    }

    #[test]
    fn test_override_directives() {
        let context = parse("-cc gcc\n-cc clang\n-ll ld\n-ll lld\n-builddir a\n-builddir b\n-target x\n-target y\n");

        assert_eq!(context.compiler, "clang");
        assert_eq!(context.linker, "lld");
        assert_eq!(context.build_directory, "b");
        assert_eq!(context.target, "y");
    }

    #[test]
    fn test_flags_accumulate_in_order() {
        let context = parse("-cf -Wall\n-lf -lm\n-CF -O2\n-cf -Wall\n-lf -lpthread\n");

        assert_eq!(context.compiler_flags, vec!["-Wall", "-O2", "-Wall"]);
        assert_eq!(context.linker_flags, vec!["-lm", "-lpthread"]);
    }

    #[test]
    fn test_comments_and_blank_lines_leave_defaults() {
        let context = parse("# generated\n\n#-cc gcc\n\n# -ll gcc\n");
        assert_eq!(context, BuildContext::default());
    }

    #[test]
    fn test_crlf_line_endings() {
        let context = parse("-cc gcc\r\n-target app\r\n");

        assert_eq!(context.compiler, "gcc");
        assert_eq!(context.target, "app");
    }

    #[test]
    fn test_read_description() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "-cc cc").unwrap();
        writeln!(file, "-ll cc").unwrap();

        let context = read_description(file.path(), BuildContext::default()).unwrap();

        assert_eq!(context.compiler, "cc");
        assert_eq!(context.linker, "cc");
    }

    #[test]
    fn test_read_description_with_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"# caf\xe9\n-cc cc\n-target app\xff\n").unwrap();

        let context = read_description(file.path(), BuildContext::default()).unwrap();

        assert_eq!(context.compiler, "cc");
        assert_eq!(context.target, "app\u{fffd}");
    }

    #[test]
    fn test_read_missing_description() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("build.ginger");

        let err = read_description(&missing, BuildContext::default()).unwrap_err();

        assert!(matches!(err, BuildError::ReadDescription { .. }));
        assert!(err.is_io());
        assert!(err.to_string().starts_with("open "));
    }
}
