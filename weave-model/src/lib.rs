//! Declaration object model for the bindweave binding generator.
//!
//! The front end parses native headers into these types; the renderer only
//! reads them. Every type is serde-(de)serializable so a parsed unit can be
//! handed across process boundaries or stored as a fixture.
//!
//! # Architecture
//!
//! ```text
//! headers → front end (parsing) → bindweave-model (declarations) → renderer
//! ```

mod class;
mod decl;
mod types;
mod unit;

pub use class::{
    Class, Event, Field, Method, MethodConversionKind, MethodKind, OperatorKind, Parameter,
};
pub use decl::{AccessSpecifier, Declaration};
pub use types::{PrimitiveType, QualifiedType, Type};
pub use unit::TranslationUnit;
