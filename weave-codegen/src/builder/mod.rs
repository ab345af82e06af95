//! Text accumulation primitives.
//!
//! - [`CodeBuilder`] - Output buffer with an indentation stack
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
