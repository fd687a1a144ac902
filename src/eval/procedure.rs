//! Evaluation procedures and the per-circuit procedure table
//!
//! A [`Procedure`] is the fixed, ahead-of-time data-flow plan of one
//! component type: read named inputs, apply field arithmetic, write named
//! outputs and intermediates, and demand evaluation of referenced
//! sub-components. Procedures are registered once per circuit definition in
//! a [`ProcedureTable`] keyed by type name and shared read-only by every
//! instance of that type.

use indexmap::IndexMap;

use super::{CalcContext, WitnessError};
use crate::graph::{CircuitDef, ComponentId, CircuitError};

/// The data-flow plan of one component type.
///
/// A procedure's only side effects are signal writes through the context.
/// It must write each of its type's output and intermediate signals exactly
/// once and must not read a signal before its producer has written it; the
/// store and scheduler turn violations into fatal [`WitnessError`]s.
pub trait Procedure {
    /// Name of the component type this procedure evaluates.
    fn type_name(&self) -> &str;

    /// Evaluate one instance of the component type.
    fn run(&self, ctx: &mut CalcContext<'_>, comp: ComponentId) -> Result<(), WitnessError>;
}

/// Read-only mapping from component type name to its procedure.
#[derive(Default)]
pub struct ProcedureTable {
    procs: IndexMap<String, Box<dyn Procedure>>,
}

impl ProcedureTable {
    pub fn new() -> ProcedureTable {
        ProcedureTable {
            procs: IndexMap::new(),
        }
    }

    /// Register a procedure under its own type name.
    pub fn register(&mut self, proc: Box<dyn Procedure>) -> Result<(), CircuitError> {
        let name = proc.type_name().to_string();
        if self.procs.insert(name.clone(), proc).is_some() {
            return Err(CircuitError::DuplicateType(name));
        }
        Ok(())
    }

    pub fn get(&self, type_name: &str) -> Option<&dyn Procedure> {
        self.procs.get(type_name).map(Box::as_ref)
    }

    /// Check up front that every component type of `def` has a procedure,
    /// so a missing entry is a configuration error before evaluation starts
    /// rather than a mid-computation abort.
    pub fn validate(&self, def: &CircuitDef) -> Result<(), WitnessError> {
        for ty in def.types() {
            if self.get(ty.name()).is_none() {
                return Err(WitnessError::MissingProcedure(ty.name().to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ComponentType;

    struct Noop(&'static str);

    impl Procedure for Noop {
        fn type_name(&self) -> &str {
            self.0
        }

        fn run(&self, _ctx: &mut CalcContext<'_>, _comp: ComponentId) -> Result<(), WitnessError> {
            Ok(())
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut table = ProcedureTable::new();
        table.register(Box::new(Noop("A"))).unwrap();
        assert!(table.get("A").is_some());
        assert!(table.get("B").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut table = ProcedureTable::new();
        table.register(Box::new(Noop("A"))).unwrap();
        let err = table.register(Box::new(Noop("A"))).unwrap_err();
        assert!(matches!(err, CircuitError::DuplicateType(_)));
    }

    #[test]
    fn test_validate_reports_missing_procedure() {
        let ty = ComponentType::builder("Lonely")
            .output("out", &[])
            .build()
            .unwrap();
        let def = CircuitDef::new(vec![ty], "Lonely").unwrap();
        let table = ProcedureTable::new();
        assert!(matches!(
            table.validate(&def),
            Err(WitnessError::MissingProcedure(_))
        ));
    }
}
