use serde::{Deserialize, Serialize};

use crate::Class;

/// One parsed input file's worth of declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslationUnit {
    /// Native header the declarations came from (e.g., `geometry.h`).
    pub file_name: String,
    #[serde(default)]
    pub classes: Vec<Class>,
}

impl TranslationUnit {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            classes: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }
}
