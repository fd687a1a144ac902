//! Evaluation of the component tree
//!
//! This layer turns a static [`crate::graph::CircuitDef`] plus a set of
//! per-type [`Procedure`]s into a fully assigned witness:
//!
//! - [`Procedure`] / [`ProcedureTable`] - one evaluation procedure per
//!   component type, dispatched by type name
//! - [`CalcContext`] - the view a procedure gets: read/write signals on
//!   itself or a sub-component, fetch field constants, and demand that a
//!   sub-component be evaluated
//! - [`scheduler`] - drives the pull-based recursion and guarantees each
//!   instance reaches `Finished` exactly once
//!
//! All [`WitnessError`]s are fatal for the current computation: they mean
//! the compiled metadata and the procedures disagree, and the partially
//! assigned store is discarded wholesale.

mod context;
mod procedure;
pub mod scheduler;

pub use context::CalcContext;
pub use procedure::{Procedure, ProcedureTable};

use thiserror::Error;

use crate::graph::CircuitError;
use crate::store::StoreError;

/// Integrity violations during witness evaluation. Never user-recoverable;
/// each one names the offending component and signal.
#[derive(Error, Debug)]
pub enum WitnessError {
    #[error("signal `{signal}` of component {component}: {source}")]
    Signal {
        component: String,
        signal: String,
        #[source]
        source: StoreError,
    },

    #[error("component {component}: {source}")]
    Layout {
        component: String,
        #[source]
        source: CircuitError,
    },

    #[error("no procedure registered for component type `{0}`")]
    MissingProcedure(String),

    #[error("component {component} evaluated before its input `{signal}` was assigned")]
    InputsNotReady { component: String, signal: String },

    #[error("component {component} re-entered while still evaluating")]
    Reentered { component: String },

    #[error("component {component} never reached the finished state")]
    Unfinished { component: String },
}
