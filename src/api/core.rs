//! Core API function for witness computation
//!
//! [`compute_witness`] is the end-to-end orchestration both the CLI and the
//! WASM bindings build on: validate the request against the declared main
//! inputs, instantiate the component tree, load inputs, run the scheduler,
//! and export the complete witness. Malformed input is rejected before
//! evaluation begins; integrity violations during evaluation abort the
//! computation and no partial witness is ever returned.

use indexmap::IndexMap;
use log::debug;

use crate::circuits;
use crate::eval::{scheduler, CalcContext, ProcedureTable};
use crate::field::FieldElement;
use crate::graph::{CircuitDef, CircuitError, Instances, SignalKind};
use crate::store::SignalStore;

use super::{WitnessRequest, WitnessResponse};

/// Compute the witness for `def` with the given procedures and inputs.
///
/// # Returns
/// * `Ok(WitnessResponse)` - Complete witness and public signal values
/// * `Err(String)` - Error message if validation or evaluation fails
pub fn compute_witness(
    def: &CircuitDef,
    procs: &ProcedureTable,
    request: &WitnessRequest,
) -> Result<WitnessResponse, String> {
    procs
        .validate(def)
        .map_err(|e| format!("Invalid procedure table: {}", e))?;

    let inputs =
        load_inputs(def, request).map_err(|e| format!("Invalid witness request: {}", e))?;

    let mut store = SignalStore::new();
    let mut instances = Instances::instantiate(def, &mut store)
        .map_err(|e| format!("Failed to instantiate circuit: {}", e))?;
    let main = instances.main();
    debug!(
        "instantiated {} component(s), {} signal slot(s)",
        instances.len(),
        store.size()
    );

    let mut ctx = CalcContext::new(def, procs, &mut instances, &mut store);
    for (name, value) in inputs {
        ctx.set(main, &name, value)
            .map_err(|e| format!("Failed to load input: {}", e))?;
    }

    scheduler::evaluate_circuit(&mut ctx)
        .map_err(|e| format!("Witness computation failed: {}", e))?;

    // Collect named main-component values before the store is consumed.
    let main_ty = def.ty(instances.get(main).type_id());
    let mut outputs = IndexMap::new();
    let mut public_inputs = IndexMap::new();
    for (name, slot) in main_ty.signals() {
        if !slot.is_scalar() {
            continue;
        }
        let offset = instances
            .signal_offset(def, main, name)
            .map_err(|e| format!("Failed to resolve output: {}", e))?;
        let value = store
            .read(offset)
            .map_err(|e| format!("Failed to read signal `{}`: {}", name, e))?;
        match slot.kind {
            SignalKind::Output => {
                outputs.insert(name.to_string(), value.to_decimal());
            }
            SignalKind::Input { public: true } => {
                public_inputs.insert(name.to_string(), value.to_decimal());
            }
            _ => {}
        }
    }

    // Outputs first, then public inputs: the ordering of public.json.
    let mut public_signals = outputs.clone();
    public_signals.extend(public_inputs);

    let witness = store
        .into_witness()
        .map_err(|e| format!("Incomplete witness: {}", e))?;

    Ok(WitnessResponse {
        witness: witness.iter().map(FieldElement::to_decimal).collect(),
        public_signals,
        outputs,
    })
}

/// Compute a witness for the built-in voter-eligibility circuit.
pub fn compute_voter_eligibility(request: &WitnessRequest) -> Result<WitnessResponse, String> {
    let def = circuits::circuit_def().map_err(|e| format!("Failed to build circuit: {}", e))?;
    let procs = circuits::procedures().map_err(|e| format!("Failed to build circuit: {}", e))?;
    compute_witness(&def, &procs, request)
}

/// Validate request arity against the main component's declared inputs and
/// decode all values. Array inputs would need element-wise keys, which the
/// built-in circuits do not use, so they are rejected here.
fn load_inputs(
    def: &CircuitDef,
    request: &WitnessRequest,
) -> Result<Vec<(String, FieldElement)>, CircuitError> {
    let main_ty = def.ty(def.main());

    for name in request.inputs.keys() {
        let slot = main_ty
            .signal(name)
            .map_err(|_| CircuitError::UnknownInput(name.clone()))?;
        if !matches!(slot.kind, SignalKind::Input { .. }) {
            return Err(CircuitError::UnknownInput(name.clone()));
        }
    }

    let mut values = Vec::new();
    for (name, slot) in main_ty.inputs() {
        if !slot.is_scalar() {
            return Err(CircuitError::ArrayInput(name.to_string()));
        }
        let signal = request
            .inputs
            .get(name)
            .ok_or_else(|| CircuitError::MissingInput(name.to_string()))?;
        values.push((name.to_string(), signal.to_field(name)?));
    }
    Ok(values)
}
