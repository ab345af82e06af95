//! Include directives required by a generated unit.

use std::fmt;

use indexmap::IndexSet;

/// Delimiter style of an include directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeKind {
    /// `#include <file>`
    Angled,
    /// `#include "file"`
    Quoted,
}

/// A textual inclusion required by generated code.
///
/// Equality and hashing are structural over `(file, kind)`, so two records
/// naming the same file with the same delimiters collapse to one entry in an
/// [`IncludeSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Include {
    pub file: String,
    pub kind: IncludeKind,
}

impl Include {
    /// Create an include with the given delimiter style.
    pub fn new(file: impl Into<String>, kind: IncludeKind) -> Self {
        Self {
            file: file.into(),
            kind,
        }
    }

    /// Create an angled include (`#include <file>`).
    pub fn angled(file: impl Into<String>) -> Self {
        Self::new(file, IncludeKind::Angled)
    }

    /// Create a quoted include (`#include "file"`).
    pub fn quoted(file: impl Into<String>) -> Self {
        Self::new(file, IncludeKind::Quoted)
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IncludeKind::Angled => write!(f, "#include <{}>", self.file),
            IncludeKind::Quoted => write!(f, "#include \"{}\"", self.file),
        }
    }
}

/// Deduplicating accumulator of includes for one unit.
///
/// Keeps first-insertion order so rendered output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeSet {
    includes: IndexSet<Include>,
}

impl IncludeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include. Returns `false` if an equal include was already present.
    pub fn insert(&mut self, include: Include) -> bool {
        self.includes.insert(include)
    }

    /// Check whether an equal include is present.
    pub fn contains(&self, include: &Include) -> bool {
        self.includes.contains(include)
    }

    /// Iterate over includes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Include> {
        self.includes.iter()
    }

    /// Render every directive, one per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for include in &self.includes {
            out.push_str(&include.to_string());
            out.push('\n');
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.includes.len()
    }
}

impl FromIterator<Include> for IncludeSet {
    fn from_iter<I: IntoIterator<Item = Include>>(iter: I) -> Self {
        Self {
            includes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a IncludeSet {
    type Item = &'a Include;
    type IntoIter = indexmap::set::Iter<'a, Include>;

    fn into_iter(self) -> Self::IntoIter {
        self.includes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_display() {
        assert_eq!(Include::angled("foo.h").to_string(), "#include <foo.h>");
        assert_eq!(Include::quoted("foo.h").to_string(), "#include \"foo.h\"");
    }

    #[test]
    fn test_include_equality_is_structural() {
        assert_eq!(
            Include::new("foo.h", IncludeKind::Angled),
            Include::angled(String::from("foo.h"))
        );
        assert_ne!(Include::angled("foo.h"), Include::quoted("foo.h"));
        assert_ne!(Include::angled("foo.h"), Include::angled("bar.h"));
    }

    #[test]
    fn test_include_set_deduplicates() {
        let mut set = IncludeSet::new();
        assert!(set.insert(Include::angled("foo.h")));
        assert!(!set.insert(Include::angled("foo.h")));
        assert!(set.insert(Include::quoted("foo.h")));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&Include::quoted("foo.h")));
    }

    #[test]
    fn test_include_set_keeps_insertion_order() {
        let set: IncludeSet = [
            Include::quoted("b.h"),
            Include::angled("a.h"),
            Include::quoted("b.h"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.render(), "#include \"b.h\"\n#include <a.h>\n");
    }

    #[test]
    fn test_empty_set_renders_nothing() {
        let set = IncludeSet::new();
        assert!(set.is_empty());
        assert_eq!(set.render(), "");
    }
}
