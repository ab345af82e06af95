//! Unit templates and the single-unit render entry point.

use bindweave_model::TranslationUnit;
use bindweave_options::Options;
use tracing::debug;

use crate::{CliRenderer, RenderedUnit, TransformRegistry, TypePrinter};

/// Lays out one kind of output file (header, source, ...) for a unit.
pub trait UnitTemplate {
    /// Extension of the generated file, without the dot (e.g., `h`).
    fn file_extension(&self) -> &'static str;

    /// Drive `renderer` through the unit's declarations.
    fn generate(&self, renderer: &mut CliRenderer<'_>);
}

/// Render `unit` with `template`.
///
/// The unit's hook, if `transforms` holds one for its file name, is attached
/// before the template runs.
pub fn render_unit(
    template: &dyn UnitTemplate,
    unit: &TranslationUnit,
    options: &Options,
    type_printer: &dyn TypePrinter,
    transforms: &TransformRegistry,
) -> RenderedUnit {
    let file_extension = template.file_extension();
    let mut renderer = CliRenderer::new(unit, options, type_printer, file_extension);
    renderer.set_transform(transforms.get(&unit.file_name));

    debug!(
        unit = %unit.file_name,
        file_extension,
        transform = renderer.has_transform(),
        "rendering unit"
    );

    template.generate(&mut renderer);
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NativeTypePrinter, UnitTransform};

    struct StartOnly;

    impl UnitTemplate for StartOnly {
        fn file_extension(&self) -> &'static str {
            "cpp"
        }

        fn generate(&self, renderer: &mut CliRenderer<'_>) {
            renderer.generate_start();
        }
    }

    struct Marker;

    impl UnitTransform for Marker {
        fn name(&self) -> &'static str {
            "marker"
        }

        fn on_start(&self, renderer: &mut CliRenderer<'_>) {
            let name = renderer.unit().file_name.clone();
            renderer.write_line(&format!("// transformed {name}"));
        }
    }

    #[test]
    fn test_render_unit_attaches_registered_transform() {
        let mut transforms = TransformRegistry::new();
        transforms.register("special.h", Marker);
        let options = Options::default();

        let special = TranslationUnit::new("special.h");
        let rendered = render_unit(&StartOnly, &special, &options, &NativeTypePrinter, &transforms);
        assert_eq!(rendered.body, "// transformed special.h\n");
        assert_eq!(rendered.file_extension, "cpp");

        let plain = TranslationUnit::new("plain.h");
        let rendered = render_unit(&StartOnly, &plain, &options, &NativeTypePrinter, &transforms);
        assert!(rendered.body.starts_with("//----"));
        assert!(rendered.body.ends_with("// marshalString\n"));
    }
}
