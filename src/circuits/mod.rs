//! Built-in component types: the voter-eligibility circuit
//!
//! The crate ships the component types of the `VoterEligibility` circuit, a
//! two-gate boolean check: two `IsEqual` sub-components test the
//! registration and eligibility flags against 1, and the main component
//! multiplies their outputs into `valid` while passing `voterAddress`
//! through as `commitment`.
//!
//! [`circuit_def`] and [`procedures`] assemble the definition and procedure
//! table for this circuit; each component type lives in its own module and
//! can be reused inside other definitions.

mod is_equal;
mod voter_eligibility;

pub use is_equal::IsEqual;
pub use voter_eligibility::VoterEligibility;

use crate::eval::ProcedureTable;
use crate::graph::{CircuitDef, CircuitError};

/// Circuit definition with `VoterEligibility` as the main component.
pub fn circuit_def() -> Result<CircuitDef, CircuitError> {
    CircuitDef::new(
        vec![
            voter_eligibility::component_type()?,
            is_equal::component_type()?,
        ],
        voter_eligibility::TYPE_NAME,
    )
}

/// Procedure table matching [`circuit_def`].
pub fn procedures() -> Result<ProcedureTable, CircuitError> {
    let mut table = ProcedureTable::new();
    table.register(Box::new(VoterEligibility))?;
    table.register(Box::new(IsEqual))?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circuit_def_builds() {
        let def = circuit_def().unwrap();
        assert_eq!(def.ty(def.main()).name(), "VoterEligibility");
    }

    #[test]
    fn test_procedures_cover_all_types() {
        let def = circuit_def().unwrap();
        let procs = procedures().unwrap();
        procs.validate(&def).unwrap();
    }

    #[test]
    fn test_signal_count_matches_circuit() {
        // 8 main signals + 2 * 4 IsEqual signals; the constant-one slot is
        // added by the store, giving 17 witness entries in total.
        let def = circuit_def().unwrap();
        let total: usize = def.types().map(|ty| ty.block_size()).sum();
        assert_eq!(def.ty(def.main()).block_size(), 8);
        assert_eq!(total, 12);
    }
}
