//! Output buffer for generated code.

use super::Indent;

/// Accumulates generated text, indenting every line it starts.
///
/// Text written with [`CodeBuilder::write`] is indented only when it begins
/// a new line, so a line can be assembled from several writes.
///
/// # Example
///
/// ```
/// use bindweave_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::default();
/// builder
///     .write_line("public ref class Widget")
///     .write_line("{")
///     .push_indent()
///     .write("void Draw(")
///     .write("int x")
///     .write_line(");")
///     .pop_indent()
///     .write_line("};");
///
/// assert_eq!(
///     builder.build(),
///     "public ref class Widget\n{\n    void Draw(int x);\n};\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
    at_line_start: bool,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
            at_line_start: true,
        }
    }

    /// Append text, indenting any line it starts.
    pub fn write(&mut self, s: &str) -> &mut Self {
        for piece in s.split_inclusive('\n') {
            if self.at_line_start && piece != "\n" {
                self.write_indent();
            }
            self.buffer.push_str(piece);
            self.at_line_start = piece.ends_with('\n');
        }
        self
    }

    /// Append text and terminate the line.
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.write(s).new_line()
    }

    /// Terminate the current line (or emit an empty one).
    pub fn new_line(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.at_line_start = true;
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn pop_indent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Get the current indentation level.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Columns taken by the current indentation.
    pub fn indent_width(&self) -> usize {
        self.indent_level * self.indent.width()
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
        Self::new(Indent::CLI)
    }
}
