//! Pull-based dispatcher over the component instance tree
//!
//! Evaluation is demand-driven: a parent drives a sub-component's inputs
//! and then asks for it to be evaluated. The dispatcher owns the per-
//! instance state machine (`Allocated -> Evaluating -> Finished`), checks
//! declared inputs centrally before any procedure body runs, and guarantees
//! each instance is evaluated exactly once. Termination follows from the
//! instance tree being finite and acyclic by construction.

use log::{debug, trace};

use crate::graph::{ComponentId, ComponentState};

use super::{CalcContext, WitnessError};

/// Evaluate `comp` unless it already finished.
///
/// A `Finished` component is a no-op; a component found `Evaluating` means
/// its own procedure demanded it again, which the state machine rejects.
pub fn evaluate(ctx: &mut CalcContext<'_>, comp: ComponentId) -> Result<(), WitnessError> {
    match ctx.instances.state(comp) {
        ComponentState::Finished => return Ok(()),
        ComponentState::Evaluating => {
            return Err(WitnessError::Reentered {
                component: ctx.describe(comp),
            })
        }
        ComponentState::Allocated => {}
    }

    check_inputs_ready(ctx, comp)?;

    let type_name = ctx.def.ty(ctx.instances.get(comp).type_id()).name();
    trace!("evaluating component {}", ctx.describe(comp));

    // The table reference outlives the &mut borrow of the context, so the
    // procedure can be invoked with the context itself.
    let procs = ctx.procs;
    let proc = procs
        .get(type_name)
        .ok_or_else(|| WitnessError::MissingProcedure(type_name.to_string()))?;

    ctx.instances.set_state(comp, ComponentState::Evaluating);
    proc.run(ctx, comp)?;
    ctx.instances.set_state(comp, ComponentState::Finished);

    trace!("finished component {}", ctx.describe(comp));
    Ok(())
}

/// Evaluate the whole circuit from the main component and verify that every
/// instance reached `Finished`.
pub fn evaluate_circuit(ctx: &mut CalcContext<'_>) -> Result<(), WitnessError> {
    let main = ctx.instances.main();
    debug!(
        "evaluating circuit: {} instance(s), main {}",
        ctx.instances.len(),
        ctx.describe(main)
    );
    evaluate(ctx, main)?;
    for (id, instance) in ctx.instances.iter() {
        if instance.state() != ComponentState::Finished {
            return Err(WitnessError::Unfinished {
                component: ctx.describe(id),
            });
        }
    }
    Ok(())
}

/// Declared-input check: all input signals of `comp` (every element of
/// array inputs) must be assigned before its procedure may run. This makes
/// the dependency order an explicit contract enforced here instead of a
/// convention buried in procedure bodies.
fn check_inputs_ready(ctx: &CalcContext<'_>, comp: ComponentId) -> Result<(), WitnessError> {
    let instance = ctx.instances.get(comp);
    let ty = ctx.def.ty(instance.type_id());
    for (name, slot) in ty.inputs() {
        for element in 0..slot.len() {
            let offset = instance.base() + slot.offset + element;
            if !ctx.store.is_assigned(offset) {
                return Err(WitnessError::InputsNotReady {
                    component: ctx.describe(comp),
                    signal: if slot.is_scalar() {
                        name.to_string()
                    } else {
                        format!("{}[{}]", name, element)
                    },
                });
            }
        }
    }
    Ok(())
}
