//! Test utilities for renderers and templates.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use bindweave_model::{
    AccessSpecifier, Class, Event, Field, Method, MethodConversionKind, MethodKind, OperatorKind,
    Parameter, PrimitiveType, QualifiedType, TranslationUnit,
};

/// Install a `tracing` subscriber honoring `RUST_LOG`, if none is set yet.
///
/// Returns `true` if this call installed it.
pub fn init_tracing_once() -> bool {
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .is_ok()
}

/// A unit exercising every eligibility rule.
///
/// `geometry.h` declares a value type `gfx::Point` and a reference type
/// `gfx::Canvas`, each with a mix of members that are and are not emitted.
pub fn geometry_unit() -> TranslationUnit {
    let float = || QualifiedType::builtin(PrimitiveType::Float);
    let int = || QualifiedType::builtin(PrimitiveType::Int);

    let point = Class::new("Point")
        .with_namespace(["gfx"])
        .as_value_type()
        .with_comment("A point in two-dimensional space.")
        .with_method(Method::constructor("Point", MethodKind::Constructor))
        .with_method(
            Method::constructor("Point", MethodKind::Constructor)
                .with_parameters([Parameter::new("x", float()), Parameter::new("y", float())]),
        )
        .with_method(
            Method::constructor("Point", MethodKind::CopyConstructor).with_parameter(
                Parameter::new(
                    "other",
                    QualifiedType::reference_to(QualifiedType::tag("gfx::Point").as_const()),
                ),
            ),
        )
        .with_method(
            Method::operator(
                OperatorKind::EqualEqual,
                QualifiedType::builtin(PrimitiveType::Bool),
            )
            .with_parameter(Parameter::new(
                "other",
                QualifiedType::reference_to(QualifiedType::tag("gfx::Point").as_const()),
            )),
        )
        .with_method(
            Method::operator(OperatorKind::Less, QualifiedType::builtin(PrimitiveType::Bool))
                .with_parameter(Parameter::new(
                    "other",
                    QualifiedType::reference_to(QualifiedType::tag("gfx::Point").as_const()),
                )),
        )
        .with_method(
            Method::new("Distance", float())
                .with_comment("Euclidean distance between this point and another one.")
                .with_conversion(MethodConversionKind::FunctionToInstanceMethod)
                .with_parameters([
                    Parameter::new(
                        "self",
                        QualifiedType::reference_to(QualifiedType::tag("gfx::Point").as_const()),
                    ),
                    Parameter::new(
                        "other",
                        QualifiedType::reference_to(QualifiedType::tag("gfx::Point").as_const()),
                    ),
                ]),
        )
        .with_field(Field::new("x", float()).with_comment("Horizontal coordinate."))
        .with_field(Field::new("y", float()))
        .with_field(Field::new("cached_length", float()).with_access(AccessSpecifier::Private));

    let canvas = Class::new("Canvas")
        .with_namespace(["gfx"])
        .with_method(Method::constructor("Canvas", MethodKind::Constructor))
        .with_method(
            Method::new("~Canvas", QualifiedType::void()).with_kind(MethodKind::Destructor),
        )
        .with_method(
            Method::new("operator bool", QualifiedType::builtin(PrimitiveType::Bool))
                .with_kind(MethodKind::Conversion),
        )
        .with_method(
            Method::new("Resize", QualifiedType::void())
                .with_parameters([Parameter::new("width", int()), Parameter::new("height", int())]),
        )
        .with_method(
            Method::new("Flush", QualifiedType::void()).with_access(AccessSpecifier::Protected),
        )
        .with_method(
            Method::new("Create", QualifiedType::pointer_to(QualifiedType::tag("gfx::Canvas")))
                .as_static()
                .with_parameter(Parameter::new(
                    "title",
                    QualifiedType::pointer_to(QualifiedType::builtin(PrimitiveType::Char).as_const()),
                )),
        )
        .with_method(Method::new("Debug", QualifiedType::void()).ignored())
        .with_field(Field::new("handle", QualifiedType::pointer_to(QualifiedType::void())).ignored())
        .with_event(
            Event::new("Resized", [int(), int()])
                .with_comment("Raised after the canvas size changed."),
        )
        .with_event(Event::new("Closed", Vec::new()));

    TranslationUnit::new("geometry.h")
        .with_class(point)
        .with_class(canvas)
}
