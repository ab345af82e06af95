//! C++/CLI text emission for bindweave.
//!
//! This crate turns the declarations of one translation unit into binding
//! source text and decides which members are eligible to appear in it.
//!
//! # Module Organization
//!
//! - [`builder`] - Output buffer with indentation (CodeBuilder, Indent)
//! - [`filter`] - Member eligibility rules (check_ignore_method, check_ignore_field)
//! - [`CliRenderer`] - Banner, summary, qualified-name and parameter-list emission
//! - [`UnitTransform`] - Per-unit hook replacing preamble/postamble emission
//! - [`TypePrinter`] - Seam for the dialect's type spelling
//! - [`HeaderTemplate`] - Managed wrapper declarations for a unit
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod filter;
mod header;
mod params;
mod printer;
mod renderer;
mod template;
mod transform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use bindweave_core::{Include, IncludeKind, IncludeSet, safe_identifier};
pub use filter::{
    IgnoreReason, check_ignore_field, check_ignore_method, eligible_fields, eligible_methods,
    field_ignore_reason, method_ignore_reason,
};
pub use header::HeaderTemplate;
pub use params::event_parameters;
pub use printer::{NativeTypePrinter, TypePrinter};
pub use renderer::{CliRenderer, MAX_LINE_WIDTH, RenderedUnit};
pub use template::{UnitTemplate, render_unit};
pub use transform::{TransformRegistry, UnitTransform};
