//! Generator options for bindweave.
//!
//! Options are read from a small TOML file:
//!
//! ```toml
//! generate_library_namespace = true
//! output_namespace = "Interop"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod options;
mod parse;

pub use error::{Error, Result, SourceContext};
pub use options::Options;
pub use parse::parse_options;
