//! Type printer seam.
//!
//! The renderer never decides how a native type is spelled in the output
//! dialect; it asks a [`TypePrinter`].

use bindweave_core::safe_identifier;
use bindweave_model::{Parameter, QualifiedType};

/// Renders model types and parameters as output-dialect text.
///
/// Implement this trait to plug a dialect's type mapping into the renderer.
pub trait TypePrinter {
    /// Render a single type reference.
    fn print_type(&self, ty: &QualifiedType) -> String;

    /// Render a parameter declaration (`type name` by default).
    fn print_parameter(&self, param: &Parameter) -> String {
        let ty = self.print_type(&param.qualified_type);
        let name = safe_identifier(&param.name);
        if name.is_empty() {
            ty
        } else {
            format!("{} {}", ty, name)
        }
    }
}

/// Prints types with their native spelling.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTypePrinter;

impl TypePrinter for NativeTypePrinter {
    fn print_type(&self, ty: &QualifiedType) -> String {
        ty.to_string()
    }
}
