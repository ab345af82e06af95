//! Text renderer for one C++/CLI translation unit.

use bindweave_core::{Include, IncludeSet, word_wrap_lines};
use bindweave_model::{Class, Declaration, Field, Method, Parameter, TranslationUnit};
use bindweave_options::Options;
use tracing::{debug, trace};

use crate::{
    builder::CodeBuilder,
    filter::{field_ignore_reason, method_ignore_reason},
    printer::TypePrinter,
    transform::UnitTransform,
};

/// Column budget for wrapped comments, including indentation and prefix.
pub const MAX_LINE_WIDTH: usize = 80;

const SUMMARY_PREFIX: &str = "/// ";

const BANNER: [&str; 4] = [
    "//----------------------------------------------------------------------------",
    "// This is autogenerated code by bindweave.",
    "// Do not edit this file or all your changes will be lost after re-generation.",
    "//----------------------------------------------------------------------------",
];

/// Extension of native source files, which need the interop helpers.
const NATIVE_SOURCE_EXTENSION: &str = "cpp";

const INTEROP_INCLUDE: &str = "#include \"../interop.h\"          // marshalString";

/// Output of rendering one unit, handed to the file-emission driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    /// File name of the source unit (e.g., `geometry.h`).
    pub unit: String,
    /// Extension of the generated file (e.g., `h`, `cpp`).
    pub file_extension: String,
    /// Generated text.
    pub body: String,
    /// Includes the generated text depends on.
    pub includes: IncludeSet,
}

/// Renders C++/CLI text for a single translation unit.
///
/// A renderer is bound to one unit, the generator options and a
/// [`TypePrinter`]. It owns the growing output and the unit's include set
/// until [`CliRenderer::finish`] hands them over.
///
/// # Example
///
/// ```
/// use bindweave_codegen::{CliRenderer, NativeTypePrinter};
/// use bindweave_model::TranslationUnit;
/// use bindweave_options::Options;
///
/// let unit = TranslationUnit::new("geometry.h");
/// let options = Options::default();
///
/// let mut renderer = CliRenderer::new(&unit, &options, &NativeTypePrinter, "h");
/// renderer.generate_inline_summary("A point in 2D space.");
///
/// assert_eq!(
///     renderer.finish().body,
///     "/// <summary> A point in 2D space. </summary>\n"
/// );
/// ```
pub struct CliRenderer<'a> {
    unit: &'a TranslationUnit,
    options: &'a Options,
    type_printer: &'a dyn TypePrinter,
    file_extension: &'a str,
    transform: Option<&'a dyn UnitTransform>,
    builder: CodeBuilder,
    includes: IncludeSet,
}

impl<'a> CliRenderer<'a> {
    pub fn new(
        unit: &'a TranslationUnit,
        options: &'a Options,
        type_printer: &'a dyn TypePrinter,
        file_extension: &'a str,
    ) -> Self {
        Self {
            unit,
            options,
            type_printer,
            file_extension,
            transform: None,
            builder: CodeBuilder::default(),
            includes: IncludeSet::new(),
        }
    }

    /// Attach a hook that replaces the default preamble and postamble.
    pub fn with_transform(mut self, transform: &'a dyn UnitTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Attach or detach the unit's hook.
    pub fn set_transform(&mut self, transform: Option<&'a dyn UnitTransform>) {
        self.transform = transform;
    }

    pub fn unit(&self) -> &'a TranslationUnit {
        self.unit
    }

    pub fn options(&self) -> &'a Options {
        self.options
    }

    pub fn type_printer(&self) -> &'a dyn TypePrinter {
        self.type_printer
    }

    pub fn file_extension(&self) -> &'a str {
        self.file_extension
    }

    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    // =========================================================================
    // Output buffer
    // =========================================================================

    /// Append text, indenting any line it starts.
    pub fn write(&mut self, s: &str) -> &mut Self {
        self.builder.write(s);
        self
    }

    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.builder.write_line(s);
        self
    }

    pub fn new_line(&mut self) -> &mut Self {
        self.builder.new_line();
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.builder.push_indent();
        self
    }

    pub fn pop_indent(&mut self) -> &mut Self {
        self.builder.pop_indent();
        self
    }

    /// Columns taken by the current indentation.
    pub fn indent_width(&self) -> usize {
        self.builder.indent_width()
    }

    /// Text generated so far.
    pub fn as_str(&self) -> &str {
        self.builder.as_str()
    }

    /// Record an include the unit needs. Returns `false` if already recorded.
    pub fn add_include(&mut self, include: Include) -> bool {
        self.includes.insert(include)
    }

    pub fn includes(&self) -> &IncludeSet {
        &self.includes
    }

    /// Hand over the generated text and the finalized include set.
    pub fn finish(self) -> RenderedUnit {
        RenderedUnit {
            unit: self.unit.file_name.clone(),
            file_extension: self.file_extension.to_string(),
            body: self.builder.build(),
            includes: self.includes,
        }
    }

    // =========================================================================
    // Emission points
    // =========================================================================

    /// Emit the file preamble.
    ///
    /// Without a hook this is the autogenerated-file banner, followed by the
    /// interop header include for native source files. With a hook attached
    /// the hook alone decides what is written.
    pub fn generate_start(&mut self) {
        if let Some(transform) = self.transform {
            trace!(
                unit = %self.unit.file_name,
                transform = transform.name(),
                "delegating start to transform"
            );
            transform.on_start(self);
            return;
        }

        for line in BANNER {
            self.builder.write_line(line);
        }

        if self.file_extension == NATIVE_SOURCE_EXTENSION {
            self.builder.write_line(INTEROP_INCLUDE);
        }
    }

    /// Emit whatever follows the opened namespaces (hook only).
    pub fn generate_after_namespaces(&mut self) {
        if let Some(transform) = self.transform {
            trace!(
                unit = %self.unit.file_name,
                transform = transform.name(),
                "delegating after-namespaces to transform"
            );
            transform.on_after_namespaces(self);
        }
    }

    /// Emit `comment` as a `<summary>` block wrapped to the column budget.
    ///
    /// Lines are filled greedily and words are never split. Blank comments
    /// produce no output.
    pub fn generate_summary(&mut self, comment: &str) {
        if comment.trim().is_empty() {
            return;
        }

        let max_width = MAX_LINE_WIDTH
            .saturating_sub(self.builder.indent_width())
            .saturating_sub(SUMMARY_PREFIX.len());

        self.builder.write_line("/// <summary>");
        for line in word_wrap_lines(comment, max_width) {
            let line = format!("{}{}", SUMMARY_PREFIX, line);
            self.builder.write_line(line.trim_end());
        }
        self.builder.write_line("/// </summary>");
    }

    /// Emit `comment` unwrapped as a one-line `<summary>`.
    pub fn generate_inline_summary(&mut self, comment: &str) {
        if comment.trim().is_empty() {
            return;
        }
        self.builder
            .write_line(&format!("/// <summary> {} </summary>", comment));
    }

    /// Name of `decl` as referenced from generated code, prefixed with the
    /// output namespace when namespace wrapping is enabled.
    pub fn qualified_identifier(&self, decl: &impl AsRef<Declaration>) -> String {
        let qualified_name = decl.as_ref().qualified_name();
        match self.options.library_namespace() {
            Some(namespace) => format!("{}::{}", namespace, qualified_name),
            None => qualified_name,
        }
    }

    /// Write `method`'s parameters, comma-separated.
    ///
    /// The receiver of a free function turned into an instance method is not
    /// written.
    pub fn generate_method_parameters(&mut self, method: &Method) {
        let skip = usize::from(method.has_receiver_parameter());
        let params = self.render_parameters(method.parameters.iter().skip(skip));
        self.builder.write(&params);
    }

    /// Render `parameters`, comma-separated, without any elision.
    pub fn generate_parameters_list(&self, parameters: &[Parameter]) -> String {
        self.render_parameters(parameters.iter())
    }

    fn render_parameters<'p>(&self, parameters: impl Iterator<Item = &'p Parameter>) -> String {
        parameters
            .map(|param| self.type_printer.print_parameter(param))
            .collect::<Vec<_>>()
            .join(", ")
    }

    // =========================================================================
    // Member eligibility
    // =========================================================================

    /// Whether `method` should be emitted; logs the reason when it is not.
    pub fn should_emit_method(&self, class: &Class, method: &Method) -> bool {
        match method_ignore_reason(class, method) {
            Some(reason) => {
                debug!(
                    class = %class.decl.qualified_name(),
                    method = method.name(),
                    %reason,
                    "skipping method"
                );
                false
            }
            None => true,
        }
    }

    /// Whether `field` should be emitted; logs the reason when it is not.
    pub fn should_emit_field(&self, class: &Class, field: &Field) -> bool {
        match field_ignore_reason(class, field) {
            Some(reason) => {
                debug!(
                    class = %class.decl.qualified_name(),
                    field = field.name(),
                    %reason,
                    "skipping field"
                );
                false
            }
            None => true,
        }
    }
}
