//! Generic equality check over the field
//!
//! ```text
//! signal input in[2]
//! signal output out
//! signal diff
//!
//! diff <== in[1] - in[0]
//! out  <== 1 - diff * diff
//! ```
//!
//! `out` is a 0/1 indicator: the difference is zero iff the inputs are
//! equal, and for the intended boolean inputs `diff` is 0 or ±1, so
//! `1 - diff²` is exactly 1 or 0. The engine computes the identity as
//! written whether or not the inputs are boolean; constraint validity is a
//! verifier concern.

use crate::eval::{CalcContext, Procedure, WitnessError};
use crate::graph::{CircuitError, ComponentId, ComponentType};

pub const TYPE_NAME: &str = "IsEqual";

/// Signal layout of the `IsEqual` component type.
pub fn component_type() -> Result<ComponentType, CircuitError> {
    ComponentType::builder(TYPE_NAME)
        .public_input("in", &[2])
        .output("out", &[])
        .intermediate("diff", &[])
        .build()
}

pub struct IsEqual;

impl Procedure for IsEqual {
    fn type_name(&self) -> &str {
        TYPE_NAME
    }

    fn run(&self, ctx: &mut CalcContext<'_>, comp: ComponentId) -> Result<(), WitnessError> {
        // diff <== in[1] - in[0]
        let lhs = ctx.get_at(comp, "in", 1)?;
        let rhs = ctx.get_at(comp, "in", 0)?;
        ctx.set(comp, "diff", lhs.sub(&rhs))?;

        // out <== 1 - diff * diff
        let diff = ctx.get(comp, "diff")?;
        ctx.set(comp, "out", ctx.one().sub(&diff.mul(&diff)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{scheduler, ProcedureTable};
    use crate::field::FieldElement;
    use crate::graph::{CircuitDef, Instances};
    use crate::store::SignalStore;

    fn run_is_equal(a: FieldElement, b: FieldElement) -> FieldElement {
        let def = CircuitDef::new(vec![component_type().unwrap()], TYPE_NAME).unwrap();
        let mut procs = ProcedureTable::new();
        procs.register(Box::new(IsEqual)).unwrap();
        let mut store = SignalStore::new();
        let mut instances = Instances::instantiate(&def, &mut store).unwrap();
        let main = instances.main();
        let mut ctx = CalcContext::new(&def, &procs, &mut instances, &mut store);
        ctx.set_at(main, "in", 0, a).unwrap();
        ctx.set_at(main, "in", 1, b).unwrap();
        scheduler::evaluate_circuit(&mut ctx).unwrap();
        ctx.get(main, "out").unwrap()
    }

    #[test]
    fn test_equal_zeros() {
        let out = run_is_equal(FieldElement::from_u64(0), FieldElement::from_u64(0));
        assert_eq!(&out, FieldElement::one());
    }

    #[test]
    fn test_zero_vs_one() {
        let out = run_is_equal(FieldElement::from_u64(0), FieldElement::from_u64(1));
        assert_eq!(&out, FieldElement::zero());
    }

    #[test]
    fn test_one_vs_zero() {
        let out = run_is_equal(FieldElement::from_u64(1), FieldElement::from_u64(0));
        assert_eq!(&out, FieldElement::zero());
    }

    #[test]
    fn test_equal_at_field_maximum() {
        let max = FieldElement::max_value();
        let out = run_is_equal(max.clone(), max);
        assert_eq!(&out, FieldElement::one());
    }

    #[test]
    fn test_equal_ones() {
        let out = run_is_equal(FieldElement::from_u64(1), FieldElement::from_u64(1));
        assert_eq!(&out, FieldElement::one());
    }
}
