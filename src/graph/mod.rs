//! Circuit topology: component types, signal layout, and the instance tree
//!
//! This module holds the static, compiler-supplied side of a circuit:
//!
//! - [`ComponentType`] - per-type signal layout (names, array dimensions,
//!   local offsets) and named sub-components
//! - [`CircuitDef`] - the read-only set of component types plus the main
//!   type, with every signal and sub-component name resolved at load time
//! - [`Instances`] - the instantiated component tree, one storage block per
//!   instance, with O(1) name-to-offset resolution
//!
//! Names are resolved against a typed symbol table when the definition is
//! built, so a bad name is a load-time [`CircuitError`] instead of a hash
//! collision risked at run time.

mod def;
mod instance;

pub use def::{
    CircuitDef, ComponentType, ComponentTypeBuilder, SignalKind, SignalSlot, TypeId,
};
pub use instance::{ComponentId, ComponentState, Instance, Instances};

use thiserror::Error;

use crate::encoding::ValueEncodingError;
use crate::field::FieldError;

/// Configuration-level errors: a malformed circuit definition or malformed
/// inputs, detected before any evaluation begins. Distinct from the fatal
/// integrity violations in [`crate::eval::WitnessError`].
#[derive(Error, Debug)]
pub enum CircuitError {
    #[error("duplicate signal `{signal}` in component type `{component_type}`")]
    DuplicateSignal {
        component_type: String,
        signal: String,
    },

    #[error("duplicate sub-component `{sub}` in component type `{component_type}`")]
    DuplicateSubComponent { component_type: String, sub: String },

    #[error("duplicate component type `{0}`")]
    DuplicateType(String),

    #[error("unknown component type `{0}`")]
    UnknownType(String),

    #[error("unknown signal `{signal}` in component type `{component_type}`")]
    UnknownSignal {
        component_type: String,
        signal: String,
    },

    #[error("unknown sub-component `{sub}` in component type `{component_type}`")]
    UnknownSubComponent { component_type: String, sub: String },

    #[error("index {index} out of bounds for signal `{signal}` with {len} element(s)")]
    IndexOutOfBounds {
        signal: String,
        index: usize,
        len: usize,
    },

    #[error("missing value for input signal `{0}`")]
    MissingInput(String),

    #[error("`{0}` is not a declared input signal")]
    UnknownInput(String),

    #[error("input signal `{0}` is an array; array inputs must be supplied element-wise")]
    ArrayInput(String),

    #[error("input signal `{name}`: {source}")]
    InvalidInputValue {
        name: String,
        #[source]
        source: FieldError,
    },

    #[error("input signal `{name}`: {source}")]
    InputEncoding {
        name: String,
        #[source]
        source: ValueEncodingError,
    },
}
