//! Per-unit customization of preamble and postamble emission.

use indexmap::IndexMap;

use crate::CliRenderer;

/// A hook that takes over fixed emission points of one translation unit.
///
/// When a hook is attached to a [`CliRenderer`], each operation below fully
/// replaces the renderer's built-in output at that point; nothing of the
/// default is emitted alongside it. Operations a hook does not override
/// therefore emit nothing.
///
/// # Example
///
/// ```
/// use bindweave_codegen::{CliRenderer, UnitTransform};
///
/// struct LicenseHeader;
///
/// impl UnitTransform for LicenseHeader {
///     fn name(&self) -> &'static str {
///         "license-header"
///     }
///
///     fn on_start(&self, renderer: &mut CliRenderer<'_>) {
///         renderer.write_line("// SPDX-License-Identifier: MIT");
///     }
/// }
/// ```
pub trait UnitTransform {
    /// The name of this hook (for logging).
    fn name(&self) -> &'static str;

    /// Replaces the start-of-file banner.
    #[allow(unused_variables)]
    fn on_start(&self, renderer: &mut CliRenderer<'_>) {}

    /// Runs once the output namespaces have been opened.
    #[allow(unused_variables)]
    fn on_after_namespaces(&self, renderer: &mut CliRenderer<'_>) {}
}

/// Hooks keyed by the file name of the unit they customize.
#[derive(Default)]
pub struct TransformRegistry {
    transforms: IndexMap<String, Box<dyn UnitTransform>>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `transform` to the unit named `file_name`, replacing any
    /// previous hook for that unit.
    pub fn register(
        &mut self,
        file_name: impl Into<String>,
        transform: impl UnitTransform + 'static,
    ) -> Option<Box<dyn UnitTransform>> {
        self.transforms.insert(file_name.into(), Box::new(transform))
    }

    /// The hook attached to the unit named `file_name`, if any.
    pub fn get(&self, file_name: &str) -> Option<&dyn UnitTransform> {
        self.transforms.get(file_name).map(|t| &**t)
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }
}

impl std::fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.transforms.iter().map(|(unit, t)| (unit, t.name())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl UnitTransform for Named {
        fn name(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = TransformRegistry::new();
        assert!(registry.is_empty());

        registry.register("geometry.h", Named("geometry"));
        assert_eq!(registry.get("geometry.h").map(|t| t.name()), Some("geometry"));
        assert!(registry.get("other.h").is_none());
    }

    #[test]
    fn test_register_replaces_previous_hook() {
        let mut registry = TransformRegistry::new();
        assert!(registry.register("a.h", Named("first")).is_none());

        let previous = registry.register("a.h", Named("second"));
        assert_eq!(previous.map(|t| t.name()), Some("first"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a.h").map(|t| t.name()), Some("second"));
    }

    #[test]
    fn test_debug_lists_hook_names() {
        let mut registry = TransformRegistry::new();
        registry.register("a.h", Named("alpha"));
        assert_eq!(format!("{registry:?}"), r#"{"a.h": "alpha"}"#);
    }
}
