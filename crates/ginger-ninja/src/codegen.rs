//! Ninja document rendering.

use ginger_build::{BuildContext, SourceFile};

/// Command of the `compile` rule.
pub const COMPILE_COMMAND: &str = "$cc $cf -c $in -o $out";

/// Command of the `link` rule.
pub const LINK_COMMAND: &str = "$ll $lf $in -o $out";

const HEADER: &str = "#ginger ninja file";
const LINK_EDGE: &str = "build $target : link ";

/// Ninja file generator.
pub struct NinjaGen {
    output: String,
}

impl NinjaGen {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Generate the complete ninja document for a validated context.
    pub fn generate(mut self, context: &BuildContext) -> String {
        self.writeln(HEADER);
        self.writeln("");

        self.generate_variables(context);
        self.generate_rules();

        for source in &context.source_files {
            self.generate_compile_edge(source);
        }
        self.generate_link_edge(&context.source_files);

        self.writeln("");
        self.writeln("default $target");

        self.output
    }

    fn generate_variables(&mut self, context: &BuildContext) {
        self.variable("target", &context.target);
        self.variable("builddir", &context.build_directory);
        self.variable("cc", &context.compiler);

        // Include paths ride along with the compiler flags.
        if !context.compiler_flags.is_empty() {
            let includes = context
                .include_paths
                .iter()
                .map(|path| format!("-I \"{}\"", path));
            let values: Vec<String> = context
                .compiler_flags
                .iter()
                .cloned()
                .chain(includes)
                .collect();
            self.list_variable("cf", &values);
        }

        self.variable("ll", &context.linker);

        if !context.linker_flags.is_empty() {
            self.list_variable("lf", &context.linker_flags);
        }
    }

    fn generate_rules(&mut self) {
        self.rule("compile", COMPILE_COMMAND);
        self.rule("link", LINK_COMMAND);
    }

    fn generate_compile_edge(&mut self, source: &SourceFile) {
        self.writeln("");
        self.writeln(&format!("build $builddir{}: $", source.object_path()));
        self.writeln(&format!("  compile {}", source.input_path()));
    }

    fn generate_link_edge(&mut self, sources: &[SourceFile]) {
        let indent = " ".repeat(LINK_EDGE.len());
        let last = sources.len().saturating_sub(1);

        if !sources.is_empty() {
            self.writeln("");
        }

        for (i, source) in sources.iter().enumerate() {
            let lead = if i == 0 { LINK_EDGE } else { indent.as_str() };
            let cont = if i == last { "" } else { " $" };
            self.writeln(&format!("{}$builddir{}{}", lead, source.object_path(), cont));
        }
    }

    fn variable(&mut self, name: &str, value: &str) {
        self.writeln(&format!("{} = {}", name, value));
    }

    fn list_variable(&mut self, name: &str, values: &[String]) {
        let mut line = format!("{} =", name);
        for value in values {
            line.push(' ');
            line.push_str(value);
        }
        self.writeln(&line);
    }

    fn rule(&mut self, name: &str, command: &str) {
        self.writeln("");
        self.writeln(&format!("rule {}", name));
        self.writeln(&format!("  command = {}", command));
    }

    fn writeln(&mut self, s: &str) {
        self.output.push_str(s);
        self.output.push('\n');
    }
}

impl Default for NinjaGen {
    fn default() -> Self {
        Self::new()
    }
}
