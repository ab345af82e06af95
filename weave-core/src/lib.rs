//! Core utilities and types for the bindweave binding generator.
//!
//! This crate provides the small value types and text helpers shared by the
//! renderer: include directives and their deduplicating set, identifier
//! pass-through, and the comment word-wrapper.

mod include;
mod utils;

// Include directives
pub use include::{Include, IncludeKind, IncludeSet};
// String utilities
pub use utils::{safe_identifier, word_wrap_lines};
