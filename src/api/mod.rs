//! JSON API for witness computation
//!
//! The request/response types here are the boundary between the engine and
//! its external collaborators: the input loader hands the engine a
//! [`WitnessRequest`], and the serialization/proving side consumes the
//! [`WitnessResponse`]. Both CLI and WASM bindings use
//! [`core::compute_witness`] as their implementation.

pub mod core;
pub mod types;

pub use core::{compute_voter_eligibility, compute_witness};
pub use types::{InputSignal, WitnessRequest, WitnessResponse};
