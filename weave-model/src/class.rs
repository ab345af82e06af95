//! Classes and their members.

use serde::{Deserialize, Serialize};

use crate::{AccessSpecifier, Declaration, QualifiedType};

/// Special-member classification of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Normal,
    Constructor,
    CopyConstructor,
    MoveConstructor,
    Destructor,
    /// User-defined conversion operator (`operator T()`).
    Conversion,
    /// Overloaded operator; see [`Method::operator_kind`].
    Operator,
}

/// Overloadable native operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Amp,
    Pipe,
    Tilde,
    Exclaim,
    /// Assignment (`=`).
    Equal,
    Less,
    Greater,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    /// Equality (`==`).
    EqualEqual,
    /// Inequality (`!=`).
    ExclaimEqual,
    LessEqual,
    GreaterEqual,
    AmpAmp,
    PipePipe,
    LessLess,
    GreaterGreater,
    PlusPlus,
    MinusMinus,
    Arrow,
    Call,
    Subscript,
}

impl OperatorKind {
    /// The operator token as written after `operator`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Plus => "+",
            OperatorKind::Minus => "-",
            OperatorKind::Star => "*",
            OperatorKind::Slash => "/",
            OperatorKind::Percent => "%",
            OperatorKind::Caret => "^",
            OperatorKind::Amp => "&",
            OperatorKind::Pipe => "|",
            OperatorKind::Tilde => "~",
            OperatorKind::Exclaim => "!",
            OperatorKind::Equal => "=",
            OperatorKind::Less => "<",
            OperatorKind::Greater => ">",
            OperatorKind::PlusEqual => "+=",
            OperatorKind::MinusEqual => "-=",
            OperatorKind::StarEqual => "*=",
            OperatorKind::SlashEqual => "/=",
            OperatorKind::EqualEqual => "==",
            OperatorKind::ExclaimEqual => "!=",
            OperatorKind::LessEqual => "<=",
            OperatorKind::GreaterEqual => ">=",
            OperatorKind::AmpAmp => "&&",
            OperatorKind::PipePipe => "||",
            OperatorKind::LessLess => "<<",
            OperatorKind::GreaterGreater => ">>",
            OperatorKind::PlusPlus => "++",
            OperatorKind::MinusMinus => "--",
            OperatorKind::Arrow => "->",
            OperatorKind::Call => "()",
            OperatorKind::Subscript => "[]",
        }
    }
}

/// How an earlier pass reshaped a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodConversionKind {
    #[default]
    None,
    /// A free function turned into an instance method; its first parameter
    /// is the receiver.
    FunctionToInstanceMethod,
    /// A free function turned into a static method.
    FunctionToStaticMethod,
}

/// A named, typed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub qualified_type: QualifiedType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, qualified_type: QualifiedType) -> Self {
        Self {
            name: name.into(),
            qualified_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    #[serde(flatten)]
    pub decl: Declaration,
    #[serde(default)]
    pub kind: MethodKind,
    /// Set when `kind` is [`MethodKind::Operator`].
    #[serde(default)]
    pub operator_kind: Option<OperatorKind>,
    #[serde(default)]
    pub conversion: MethodConversionKind,
    #[serde(default)]
    pub is_static: bool,
    pub return_type: QualifiedType,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Method {
    /// Create a public, non-special method.
    pub fn new(name: impl Into<String>, return_type: QualifiedType) -> Self {
        Self {
            decl: Declaration::new(name),
            kind: MethodKind::Normal,
            operator_kind: None,
            conversion: MethodConversionKind::None,
            is_static: false,
            return_type,
            parameters: Vec::new(),
        }
    }

    /// Create a constructor of the given kind for `class_name`.
    pub fn constructor(class_name: impl Into<String>, kind: MethodKind) -> Self {
        Self::new(class_name, QualifiedType::void()).with_kind(kind)
    }

    /// Create an overloaded operator.
    pub fn operator(op: OperatorKind, return_type: QualifiedType) -> Self {
        let mut method =
            Self::new(format!("operator{}", op.as_str()), return_type).with_kind(MethodKind::Operator);
        method.operator_kind = Some(op);
        method
    }

    pub fn with_kind(mut self, kind: MethodKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn with_conversion(mut self, conversion: MethodConversionKind) -> Self {
        self.conversion = conversion;
        self
    }

    pub fn with_access(mut self, access: AccessSpecifier) -> Self {
        self.decl = self.decl.with_access(access);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.decl = self.decl.with_comment(comment);
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn ignored(mut self) -> Self {
        self.decl = self.decl.ignored();
        self
    }

    pub fn name(&self) -> &str {
        &self.decl.name
    }

    /// True for plain, copy and move constructors.
    pub fn is_constructor(&self) -> bool {
        matches!(
            self.kind,
            MethodKind::Constructor | MethodKind::CopyConstructor | MethodKind::MoveConstructor
        )
    }

    pub fn is_copy_constructor(&self) -> bool {
        self.kind == MethodKind::CopyConstructor
    }

    pub fn is_move_constructor(&self) -> bool {
        self.kind == MethodKind::MoveConstructor
    }

    pub fn is_destructor(&self) -> bool {
        self.kind == MethodKind::Destructor
    }

    pub fn is_conversion_operator(&self) -> bool {
        self.kind == MethodKind::Conversion
    }

    /// True when the method was turned from a free function into an instance
    /// method and carries its receiver as the first parameter.
    pub fn has_receiver_parameter(&self) -> bool {
        self.conversion == MethodConversionKind::FunctionToInstanceMethod
    }
}

impl AsRef<Declaration> for Method {
    fn as_ref(&self) -> &Declaration {
        &self.decl
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(flatten)]
    pub decl: Declaration,
    pub qualified_type: QualifiedType,
}

impl Field {
    pub fn new(name: impl Into<String>, qualified_type: QualifiedType) -> Self {
        Self {
            decl: Declaration::new(name),
            qualified_type,
        }
    }

    pub fn with_access(mut self, access: AccessSpecifier) -> Self {
        self.decl = self.decl.with_access(access);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.decl = self.decl.with_comment(comment);
        self
    }

    pub fn ignored(mut self) -> Self {
        self.decl = self.decl.ignored();
        self
    }

    pub fn name(&self) -> &str {
        &self.decl.name
    }
}

impl AsRef<Declaration> for Field {
    fn as_ref(&self) -> &Declaration {
        &self.decl
    }
}

/// An event; its callable signature carries parameter types only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(flatten)]
    pub decl: Declaration,
    #[serde(default)]
    pub parameters: Vec<QualifiedType>,
}

impl Event {
    pub fn new(name: impl Into<String>, parameters: impl IntoIterator<Item = QualifiedType>) -> Self {
        Self {
            decl: Declaration::new(name),
            parameters: parameters.into_iter().collect(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.decl = self.decl.with_comment(comment);
        self
    }

    pub fn name(&self) -> &str {
        &self.decl.name
    }
}

impl AsRef<Declaration> for Event {
    fn as_ref(&self) -> &Declaration {
        &self.decl
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    #[serde(flatten)]
    pub decl: Declaration,
    /// Instances are copied by value in the output dialect, which gives the
    /// class an implicit default constructor.
    #[serde(default)]
    pub is_value_type: bool,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            decl: Declaration::new(name),
            is_value_type: false,
            methods: Vec::new(),
            fields: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn with_namespace<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.decl = self.decl.with_namespace(scopes);
        self
    }

    pub fn as_value_type(mut self) -> Self {
        self.is_value_type = true;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.decl = self.decl.with_comment(comment);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub fn name(&self) -> &str {
        &self.decl.name
    }
}

impl AsRef<Declaration> for Class {
    fn as_ref(&self) -> &Declaration {
        &self.decl
    }
}
