//! Parameter synthesis for events.

use bindweave_model::{Event, Parameter};

/// Materialize an event's signature as named parameters.
///
/// Events carry parameter types only; each type is paired with a synthesized
/// name `_0`, `_1`, ... in declaration order.
pub fn event_parameters(event: &Event) -> Vec<Parameter> {
    event
        .parameters
        .iter()
        .enumerate()
        .map(|(i, ty)| Parameter::new(format!("_{}", i), ty.clone()))
        .collect()
}
