//! Snapshot tests for header generation.
//!
//! Units are loaded from JSON fixtures the way the front end hands them over.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use bindweave_codegen::{
    CliRenderer, HeaderTemplate, NativeTypePrinter, TransformRegistry, eligible_fields,
    eligible_methods, render_unit,
};
use bindweave_model::TranslationUnit;
use bindweave_options::Options;

fn load_unit(name: &str) -> TranslationUnit {
    let path = format!("{}/tests/fixtures/{}.json", env!("CARGO_MANIFEST_DIR"), name);
    let json = std::fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&json).expect("Failed to parse fixture")
}

fn library_options() -> Options {
    r#"
    generate_library_namespace = true
    output_namespace = "Vendor::Interop"
    "#
    .parse()
    .expect("Failed to parse options")
}

#[test]
fn test_vector_header() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let unit = load_unit("vector");
    let rendered = render_unit(
        &HeaderTemplate,
        &unit,
        &library_options(),
        &NativeTypePrinter,
        &TransformRegistry::new(),
    );

    insta::assert_snapshot!(rendered.body, @r##"
//----------------------------------------------------------------------------
// This is autogenerated code by bindweave.
// Do not edit this file or all your changes will be lost after re-generation.
//----------------------------------------------------------------------------
#pragma once

#include "math/vector.h"

namespace Vendor::Interop
{

    /// <summary>
    /// Three-component vector of single-precision floats, laid out contiguously
    /// so it can be passed to native code without copying.
    /// </summary>
    public value struct Vector3
    {
    public:
        Vector3(float x, float y, float z);
        float Length();
        bool operator!=(const math::Vector3& other);
        float x;
        float y;
        float z;
    };
}
"##);
}

#[test]
fn test_vector_eligible_members() {
    let unit = load_unit("vector");
    let class = &unit.classes[0];

    let methods: Vec<String> = eligible_methods(class)
        .map(|m| format!("{}/{}", m.name(), m.parameters.len()))
        .collect();
    assert_eq!(methods, vec!["Vector3/3", "Length/1", "operator!=/1"]);

    let fields: Vec<&str> = eligible_fields(class).map(|f| f.name()).collect();
    assert_eq!(fields, vec!["x", "y", "z"]);
}

#[test]
fn test_vector_qualified_identifier() {
    let unit = load_unit("vector");
    let options = library_options();
    let renderer = CliRenderer::new(&unit, &options, &NativeTypePrinter, "cpp");

    assert_eq!(
        renderer.qualified_identifier(&unit.classes[0]),
        "Vendor::Interop::math::Vector3"
    );

    let plain = Options::default();
    let renderer = CliRenderer::new(&unit, &plain, &NativeTypePrinter, "cpp");
    assert_eq!(renderer.qualified_identifier(&unit.classes[0]), "math::Vector3");
}

#[test]
fn test_vector_source_preamble() {
    let unit = load_unit("vector");
    let options = Options::default();
    let mut renderer = CliRenderer::new(&unit, &options, &NativeTypePrinter, "cpp");

    renderer.generate_start();
    renderer.generate_summary(unit.classes[0].decl.comment.as_deref().unwrap_or_default());

    insta::assert_snapshot!(renderer.finish().body, @r##"
//----------------------------------------------------------------------------
// This is autogenerated code by bindweave.
// Do not edit this file or all your changes will be lost after re-generation.
//----------------------------------------------------------------------------
#include "../interop.h"          // marshalString
/// <summary>
/// Three-component vector of single-precision floats, laid out contiguously so
/// it can be passed to native code without copying.
/// </summary>
"##);
}
