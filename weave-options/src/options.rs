/// Options that shape the rendered output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Prefix qualified identifiers with [`Options::output_namespace`].
    pub generate_library_namespace: bool,
    /// Namespace the generated library lives in (e.g., `Interop`).
    pub output_namespace: String,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable namespace wrapping under `namespace`.
    pub fn with_library_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.generate_library_namespace = true;
        self.output_namespace = namespace.into();
        self
    }

    /// The namespace to wrap output in, if wrapping is enabled.
    pub fn library_namespace(&self) -> Option<&str> {
        self.generate_library_namespace
            .then_some(self.output_namespace.as_str())
    }
}
