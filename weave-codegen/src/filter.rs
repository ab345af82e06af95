//! Member eligibility rules.
//!
//! A binding exposes only the canonical public API of a class. Special
//! members (constructors the output dialect provides implicitly, copy/move
//! constructors, destructors, conversions and equality) are produced by the
//! dialect itself and are never forwarded.
//!
//! These are pure functions of `(class, member)`; they hold no state.

use std::fmt;

use bindweave_model::{Class, Field, Method, OperatorKind};

/// Why a member is left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// Flagged ignored by an earlier pass.
    Ignored,
    /// Zero-parameter constructor of a value type, which gets one implicitly.
    ImplicitDefaultConstructor,
    CopyOrMoveConstructor,
    Destructor,
    /// `operator==` overload.
    EqualityOperator,
    /// User-defined conversion operator.
    ConversionOperator,
    NotPublic,
}

impl IgnoreReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreReason::Ignored => "ignored",
            IgnoreReason::ImplicitDefaultConstructor => "implicit default constructor",
            IgnoreReason::CopyOrMoveConstructor => "copy or move constructor",
            IgnoreReason::Destructor => "destructor",
            IgnoreReason::EqualityOperator => "equality operator",
            IgnoreReason::ConversionOperator => "conversion operator",
            IgnoreReason::NotPublic => "not public",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first rule that excludes `method` from `class`'s output, if any.
pub fn method_ignore_reason(class: &Class, method: &Method) -> Option<IgnoreReason> {
    if method.decl.ignore {
        return Some(IgnoreReason::Ignored);
    }

    let is_empty_ctor = method.is_constructor() && method.parameters.is_empty();
    if class.is_value_type && is_empty_ctor {
        return Some(IgnoreReason::ImplicitDefaultConstructor);
    }

    if method.is_copy_constructor() || method.is_move_constructor() {
        return Some(IgnoreReason::CopyOrMoveConstructor);
    }

    if method.is_destructor() {
        return Some(IgnoreReason::Destructor);
    }

    // Other comparison operators are kept.
    if method.operator_kind == Some(OperatorKind::EqualEqual) {
        return Some(IgnoreReason::EqualityOperator);
    }

    if method.is_conversion_operator() {
        return Some(IgnoreReason::ConversionOperator);
    }

    if !method.decl.access.is_public() {
        return Some(IgnoreReason::NotPublic);
    }

    None
}

/// The first rule that excludes `field` from `class`'s output, if any.
pub fn field_ignore_reason(_class: &Class, field: &Field) -> Option<IgnoreReason> {
    if field.decl.ignore {
        return Some(IgnoreReason::Ignored);
    }

    if !field.decl.access.is_public() {
        return Some(IgnoreReason::NotPublic);
    }

    None
}

/// Whether `method` must be left out of the output.
pub fn check_ignore_method(class: &Class, method: &Method) -> bool {
    method_ignore_reason(class, method).is_some()
}

/// Whether `field` must be left out of the output.
pub fn check_ignore_field(class: &Class, field: &Field) -> bool {
    field_ignore_reason(class, field).is_some()
}

/// Methods of `class` that belong in the output, in declaration order.
pub fn eligible_methods(class: &Class) -> impl Iterator<Item = &Method> {
    class
        .methods
        .iter()
        .filter(move |method| !check_ignore_method(class, method))
}

/// Fields of `class` that belong in the output, in declaration order.
pub fn eligible_fields(class: &Class) -> impl Iterator<Item = &Field> {
    class
        .fields
        .iter()
        .filter(move |field| !check_ignore_field(class, field))
}

#[cfg(test)]
mod tests {
    use bindweave_model::{AccessSpecifier, MethodKind, Parameter, PrimitiveType, QualifiedType};

    use super::*;

    fn int() -> QualifiedType {
        QualifiedType::builtin(PrimitiveType::Int)
    }

    fn ref_class() -> Class {
        Class::new("Widget")
    }

    fn value_class() -> Class {
        Class::new("Point").as_value_type()
    }

    fn plain_method() -> Method {
        Method::new("Resize", QualifiedType::void()).with_parameters([
            Parameter::new("width", int()),
            Parameter::new("height", int()),
        ])
    }

    #[test]
    fn test_public_two_argument_method_is_included() {
        assert!(!check_ignore_method(&ref_class(), &plain_method()));
        assert!(!check_ignore_method(&value_class(), &plain_method()));
        assert_eq!(method_ignore_reason(&ref_class(), &plain_method()), None);
    }

    #[test]
    fn test_ignored_method() {
        let method = plain_method().ignored();
        assert_eq!(
            method_ignore_reason(&ref_class(), &method),
            Some(IgnoreReason::Ignored)
        );
    }

    #[test]
    fn test_empty_constructor_on_value_type() {
        let ctor = Method::constructor("Point", MethodKind::Constructor);
        assert_eq!(
            method_ignore_reason(&value_class(), &ctor),
            Some(IgnoreReason::ImplicitDefaultConstructor)
        );
    }

    #[test]
    fn test_empty_constructor_on_reference_type_is_kept() {
        let ctor = Method::constructor("Widget", MethodKind::Constructor);
        assert!(!check_ignore_method(&ref_class(), &ctor));
    }

    #[test]
    fn test_constructor_with_arguments_on_value_type_is_kept() {
        let ctor = Method::constructor("Point", MethodKind::Constructor)
            .with_parameter(Parameter::new("x", int()));
        assert!(!check_ignore_method(&value_class(), &ctor));
    }

    #[test]
    fn test_copy_and_move_constructors() {
        let source = Parameter::new(
            "other",
            QualifiedType::reference_to(QualifiedType::tag("Widget").as_const()),
        );
        let copy =
            Method::constructor("Widget", MethodKind::CopyConstructor).with_parameter(source);
        let moved = Method::constructor("Widget", MethodKind::MoveConstructor).with_parameter(
            Parameter::new(
                "other",
                QualifiedType::rvalue_reference_to(QualifiedType::tag("Widget")),
            ),
        );

        for class in [ref_class(), value_class()] {
            assert_eq!(
                method_ignore_reason(&class, &copy),
                Some(IgnoreReason::CopyOrMoveConstructor)
            );
            assert_eq!(
                method_ignore_reason(&class, &moved),
                Some(IgnoreReason::CopyOrMoveConstructor)
            );
        }
    }

    #[test]
    fn test_destructor() {
        let dtor = Method::new("~Widget", QualifiedType::void()).with_kind(MethodKind::Destructor);
        assert_eq!(
            method_ignore_reason(&ref_class(), &dtor),
            Some(IgnoreReason::Destructor)
        );
    }

    #[test]
    fn test_equality_operator() {
        let eq = Method::operator(
            OperatorKind::EqualEqual,
            QualifiedType::builtin(PrimitiveType::Bool),
        )
        .with_parameter(Parameter::new("other", QualifiedType::tag("Widget")));
        assert_eq!(
            method_ignore_reason(&ref_class(), &eq),
            Some(IgnoreReason::EqualityOperator)
        );
    }

    #[test]
    fn test_other_comparison_operators_are_kept() {
        for op in [
            OperatorKind::ExclaimEqual,
            OperatorKind::Less,
            OperatorKind::LessEqual,
            OperatorKind::Greater,
            OperatorKind::GreaterEqual,
        ] {
            let method = Method::operator(op, QualifiedType::builtin(PrimitiveType::Bool));
            assert!(!check_ignore_method(&ref_class(), &method), "{op:?}");
        }
    }

    #[test]
    fn test_assignment_operator_is_kept() {
        let method = Method::operator(
            OperatorKind::Equal,
            QualifiedType::reference_to(QualifiedType::tag("Widget")),
        );
        assert_eq!(method.name(), "operator=");
        assert_eq!(method_ignore_reason(&ref_class(), &method), None);
    }

    #[test]
    fn test_conversion_operator() {
        let conversion =
            Method::new("operator int", int()).with_kind(MethodKind::Conversion);
        assert_eq!(
            method_ignore_reason(&ref_class(), &conversion),
            Some(IgnoreReason::ConversionOperator)
        );
    }

    #[test]
    fn test_non_public_methods() {
        for access in [AccessSpecifier::Protected, AccessSpecifier::Private] {
            let method = plain_method().with_access(access);
            assert_eq!(
                method_ignore_reason(&ref_class(), &method),
                Some(IgnoreReason::NotPublic)
            );
        }
    }

    #[test]
    fn test_reasons_combine_without_changing_result() {
        let method = Method::new("~Widget", QualifiedType::void())
            .with_kind(MethodKind::Destructor)
            .with_access(AccessSpecifier::Private)
            .ignored();
        assert!(check_ignore_method(&ref_class(), &method));
    }

    #[test]
    fn test_fields() {
        let class = ref_class();
        let public = Field::new("size", int());
        let private = Field::new("cache", int()).with_access(AccessSpecifier::Private);
        let protected = Field::new("parent", int()).with_access(AccessSpecifier::Protected);
        let ignored = Field::new("handle", int()).ignored();

        assert!(!check_ignore_field(&class, &public));
        assert!(check_ignore_field(&class, &private));
        assert!(check_ignore_field(&class, &protected));
        assert_eq!(
            field_ignore_reason(&class, &ignored),
            Some(IgnoreReason::Ignored)
        );
    }

    #[test]
    fn test_eligible_members_keep_order() {
        let class = value_class()
            .with_method(Method::constructor("Point", MethodKind::Constructor))
            .with_method(plain_method())
            .with_method(Method::new("Hidden", int()).with_access(AccessSpecifier::Private))
            .with_method(Method::new("Length", int()))
            .with_field(Field::new("x", int()))
            .with_field(Field::new("secret", int()).with_access(AccessSpecifier::Private))
            .with_field(Field::new("y", int()));

        let methods: Vec<&str> = eligible_methods(&class).map(Method::name).collect();
        assert_eq!(methods, vec!["Resize", "Length"]);

        let fields: Vec<&str> = eligible_fields(&class).map(Field::name).collect();
        assert_eq!(fields, vec!["x", "y"]);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(IgnoreReason::NotPublic.to_string(), "not public");
        assert_eq!(
            IgnoreReason::ImplicitDefaultConstructor.to_string(),
            "implicit default constructor"
        );
    }
}
