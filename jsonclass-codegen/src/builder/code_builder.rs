//! Code builder utility for generating properly indented code.

use super::Indent;

/// Mutable builder for emitting code line by line with proper indentation.
///
/// The builder tracks the current indent level, so renderers only need to
/// describe structure (`push_indent` / `push_dedent`) and never pad strings
/// themselves.
///
/// # Example
///
/// ```
/// use jsonclass_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::cpp();
/// builder.push_block("int main() {", "}", |b| {
///     b.push_line("return 0;");
/// });
///
/// assert_eq!(builder.build(), "int main() {\n  return 0;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (C++ default).
    pub fn cpp() -> Self {
        Self::new(Indent::CPP)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `//` comment line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block: header line, indented body, closing line.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        f(self);
        self.push_dedent().push_line(close)
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::cpp()
    }
}
