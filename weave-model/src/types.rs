//! Type references as spelled in the native source.
//!
//! These are the types the type printer consumes. `Display` renders the
//! native (C++) spelling; mapping to the output dialect is the printer's job.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Builtin native types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Void,
    Bool,
    Char,
    UChar,
    WChar,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Float,
    Double,
}

impl PrimitiveType {
    /// Native spelling of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Void => "void",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Char => "char",
            PrimitiveType::UChar => "unsigned char",
            PrimitiveType::WChar => "wchar_t",
            PrimitiveType::Short => "short",
            PrimitiveType::UShort => "unsigned short",
            PrimitiveType::Int => "int",
            PrimitiveType::UInt => "unsigned int",
            PrimitiveType::Long => "long",
            PrimitiveType::ULong => "unsigned long",
            PrimitiveType::LongLong => "long long",
            PrimitiveType::ULongLong => "unsigned long long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }
}

/// A native type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Builtin(PrimitiveType),
    Pointer(Box<QualifiedType>),
    /// Lvalue reference (`T&`).
    Reference(Box<QualifiedType>),
    /// Rvalue reference (`T&&`).
    RvalueReference(Box<QualifiedType>),
    /// A class, struct or enum, by qualified name.
    Tag(String),
}

impl Type {
    /// Whether the type wraps another (pointer or reference).
    pub fn is_indirection(&self) -> bool {
        matches!(
            self,
            Type::Pointer(_) | Type::Reference(_) | Type::RvalueReference(_)
        )
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Builtin(p) => f.write_str(p.as_str()),
            Type::Pointer(inner) => write!(f, "{}*", inner),
            Type::Reference(inner) => write!(f, "{}&", inner),
            Type::RvalueReference(inner) => write!(f, "{}&&", inner),
            Type::Tag(name) => f.write_str(name),
        }
    }
}

/// A type together with its cv-qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedType {
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub is_const: bool,
}

impl QualifiedType {
    pub fn new(ty: Type) -> Self {
        Self {
            ty,
            is_const: false,
        }
    }

    pub fn builtin(ty: PrimitiveType) -> Self {
        Self::new(Type::Builtin(ty))
    }

    pub fn void() -> Self {
        Self::builtin(PrimitiveType::Void)
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::new(Type::Tag(name.into()))
    }

    pub fn pointer_to(pointee: QualifiedType) -> Self {
        Self::new(Type::Pointer(Box::new(pointee)))
    }

    pub fn reference_to(referee: QualifiedType) -> Self {
        Self::new(Type::Reference(Box::new(referee)))
    }

    pub fn rvalue_reference_to(referee: QualifiedType) -> Self {
        Self::new(Type::RvalueReference(Box::new(referee)))
    }

    /// Add a `const` qualifier.
    pub fn as_const(mut self) -> Self {
        self.is_const = true;
        self
    }
}

impl fmt::Display for QualifiedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_const, self.ty.is_indirection()) {
            (false, _) => write!(f, "{}", self.ty),
            // const applies to the pointer itself, so it trails
            (true, true) => write!(f, "{} const", self.ty),
            (true, false) => write!(f, "const {}", self.ty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_spelling() {
        assert_eq!(QualifiedType::builtin(PrimitiveType::Int).to_string(), "int");
        assert_eq!(
            QualifiedType::builtin(PrimitiveType::ULongLong).to_string(),
            "unsigned long long"
        );
    }

    #[test]
    fn test_const_and_indirection_spelling() {
        let const_char_ptr =
            QualifiedType::pointer_to(QualifiedType::builtin(PrimitiveType::Char).as_const());
        assert_eq!(const_char_ptr.to_string(), "const char*");

        let const_ref = QualifiedType::reference_to(QualifiedType::tag("gfx::Point").as_const());
        assert_eq!(const_ref.to_string(), "const gfx::Point&");

        let ptr_const = QualifiedType::pointer_to(QualifiedType::tag("Node")).as_const();
        assert_eq!(ptr_const.to_string(), "Node* const");

        let rvalue = QualifiedType::rvalue_reference_to(QualifiedType::tag("Buffer"));
        assert_eq!(rvalue.to_string(), "Buffer&&");
    }
}
