//! Attributes shared by every named declaration.

use serde::{Deserialize, Serialize};

/// Member access of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessSpecifier {
    #[default]
    Public,
    Protected,
    Private,
}

impl AccessSpecifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessSpecifier::Public => "public",
            AccessSpecifier::Protected => "protected",
            AccessSpecifier::Private => "private",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, AccessSpecifier::Public)
    }
}

/// Name, scope and flags of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Declaration {
    /// Unqualified name.
    pub name: String,
    /// Enclosing scopes, outermost first (e.g., `["ns", "Outer"]`).
    #[serde(default)]
    pub namespace: Vec<String>,
    #[serde(default)]
    pub access: AccessSpecifier,
    /// Set by earlier passes to drop the declaration from output.
    #[serde(default)]
    pub ignore: bool,
    /// Documentation comment text, without comment markers.
    #[serde(default)]
    pub comment: Option<String>,
}

impl Declaration {
    /// Create a public, top-level declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Place the declaration inside the given scopes, outermost first.
    pub fn with_namespace<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespace = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_access(mut self, access: AccessSpecifier) -> Self {
        self.access = access;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Fully qualified name joined with `::` (e.g., `ns::Outer::name`).
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            return self.name.clone();
        }
        format!("{}::{}", self.namespace.join("::"), self.name)
    }
}

impl AsRef<Declaration> for Declaration {
    fn as_ref(&self) -> &Declaration {
        self
    }
}
