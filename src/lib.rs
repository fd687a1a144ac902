//! Witgen witness calculation engine
//!
//! This library evaluates a hierarchical graph of components and signals
//! over the BN254 scalar field and produces a complete witness: one value
//! for every signal of the instantiated circuit, for later use by a proving
//! system.
//!
//! The engine consumes a static, pre-computed topology - per-type signal
//! layouts, sub-component wiring, and one evaluation procedure per
//! component type - and drives a pull-based evaluation where parents push
//! values into sub-component inputs and pull their outputs. Every signal is
//! assigned exactly once; reads of unassigned signals and double writes are
//! fatal integrity errors, never silently ignored.
//!
//! # Layering
//!
//! - [`field`]    - arithmetic over the fixed prime field
//! - [`store`]    - flat single-assignment signal storage
//! - [`graph`]    - component types, layout resolution, instance tree
//! - [`eval`]     - procedures, calculation context, scheduler
//! - [`circuits`] - the built-in voter-eligibility component types
//! - [`api`]      - JSON request/response layer (used by CLI and WASM)
//!
//! # Example
//!
//! ```
//! use witgen_core::api::{compute_voter_eligibility, InputSignal, WitnessRequest};
//!
//! let mut request = WitnessRequest::default();
//! for (name, value) in [
//!     ("regionHash", "11"),
//!     ("electionId", "1"),
//!     ("voterAddress", "42"),
//!     ("region", "3"),
//!     ("isRegistered", "1"),
//!     ("isEligible", "1"),
//! ] {
//!     request.inputs.insert(name.to_string(), InputSignal::decimal(value));
//! }
//!
//! let response = compute_voter_eligibility(&request).unwrap();
//! assert_eq!(response.outputs["valid"], "1");
//! assert_eq!(response.outputs["commitment"], "42");
//! ```

// Core modules
pub mod api;
pub mod circuits;
pub mod encoding;
pub mod eval;
pub mod field;
pub mod graph;
pub mod store;
pub mod wasm;

// Re-export commonly used types
pub use api::{InputSignal, WitnessRequest, WitnessResponse};
pub use encoding::{parse_value, parse_value_auto, ValueEncoding};
pub use eval::{CalcContext, Procedure, ProcedureTable, WitnessError};
pub use field::{FieldElement, FieldError};
pub use graph::{CircuitDef, CircuitError, ComponentId, ComponentType, Instances};
pub use store::{SignalStore, StoreError};
