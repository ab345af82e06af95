//! C++/CLI header template.

use bindweave_core::{Include, safe_identifier};
use bindweave_model::{Class, Event, Field, Method, MethodConversionKind};

use crate::{CliRenderer, UnitTemplate, params::event_parameters};

/// Declares a managed wrapper for every class of a unit.
///
/// Each class becomes a `public ref class` (or `public value struct` for
/// value types) exposing its eligible constructors, methods, fields and
/// events.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderTemplate;

impl UnitTemplate for HeaderTemplate {
    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn generate(&self, r: &mut CliRenderer<'_>) {
        let unit = r.unit();

        r.generate_start();
        r.write_line("#pragma once");
        r.new_line();

        r.add_include(Include::quoted(unit.file_name.as_str()));
        let includes = r.includes().render();
        r.write(&includes);

        let namespace = r.options().library_namespace();
        if let Some(namespace) = namespace {
            r.new_line();
            r.write_line(&format!("namespace {}", namespace));
            r.write_line("{");
            r.push_indent();
        }

        r.generate_after_namespaces();

        for class in unit.classes.iter().filter(|class| !class.decl.ignore) {
            r.new_line();
            generate_class(r, class);
        }

        if namespace.is_some() {
            r.pop_indent();
            r.write_line("}");
        }
    }
}

fn generate_class(r: &mut CliRenderer<'_>, class: &Class) {
    if let Some(comment) = &class.decl.comment {
        r.generate_summary(comment);
    }

    let keyword = if class.is_value_type {
        "value struct"
    } else {
        "ref class"
    };
    r.write_line(&format!(
        "public {} {}",
        keyword,
        safe_identifier(class.name())
    ));
    r.write_line("{");
    r.write_line("public:");
    r.push_indent();

    for method in &class.methods {
        if r.should_emit_method(class, method) {
            generate_method(r, class, method);
        }
    }

    for field in &class.fields {
        if r.should_emit_field(class, field) {
            generate_field(r, field);
        }
    }

    for event in &class.events {
        if !event.decl.ignore {
            generate_event(r, event);
        }
    }

    r.pop_indent();
    r.write_line("};");
}

fn generate_method(r: &mut CliRenderer<'_>, class: &Class, method: &Method) {
    if let Some(comment) = &method.decl.comment {
        r.generate_summary(comment);
    }

    if method.is_static || method.conversion == MethodConversionKind::FunctionToStaticMethod {
        r.write("static ");
    }

    if method.is_constructor() {
        r.write(safe_identifier(class.name()));
    } else {
        let return_type = r.type_printer().print_type(&method.return_type);
        r.write(&format!("{} {}", return_type, safe_identifier(method.name())));
    }

    r.write("(");
    r.generate_method_parameters(method);
    r.write_line(");");
}

fn generate_field(r: &mut CliRenderer<'_>, field: &Field) {
    if let Some(comment) = &field.decl.comment {
        r.generate_inline_summary(comment);
    }

    let ty = r.type_printer().print_type(&field.qualified_type);
    r.write_line(&format!("{} {};", ty, safe_identifier(field.name())));
}

fn generate_event(r: &mut CliRenderer<'_>, event: &Event) {
    if let Some(comment) = &event.decl.comment {
        r.generate_summary(comment);
    }

    let name = safe_identifier(event.name());
    let params = r.generate_parameters_list(&event_parameters(event));
    r.write_line(&format!("delegate void {}Handler({});", name, params));
    r.write_line(&format!("event {}Handler^ {};", name, name));
}
