//! The mutation surface evaluation procedures run against
//!
//! A [`CalcContext`] bundles the read-only circuit definition and procedure
//! table with the mutable instance arena and signal store for one witness
//! computation. Procedures never touch offsets directly; every access goes
//! through name resolution here so integrity errors can name the offending
//! component and signal.

use crate::field::FieldElement;
use crate::graph::{CircuitDef, CircuitError, ComponentId, Instances};
use crate::store::{SignalStore, StoreError};

use super::{scheduler, ProcedureTable, WitnessError};

pub struct CalcContext<'a> {
    pub(crate) def: &'a CircuitDef,
    pub(crate) procs: &'a ProcedureTable,
    pub(crate) instances: &'a mut Instances,
    pub(crate) store: &'a mut SignalStore,
}

impl<'a> CalcContext<'a> {
    pub fn new(
        def: &'a CircuitDef,
        procs: &'a ProcedureTable,
        instances: &'a mut Instances,
        store: &'a mut SignalStore,
    ) -> CalcContext<'a> {
        CalcContext {
            def,
            procs,
            instances,
            store,
        }
    }

    pub fn def(&self) -> &CircuitDef {
        self.def
    }

    /// Human-readable identity of an instance for diagnostics,
    /// e.g. `#2 (IsEqual)`.
    pub(crate) fn describe(&self, comp: ComponentId) -> String {
        let type_name = self.def.ty(self.instances.get(comp).type_id()).name();
        format!("#{} ({})", comp.index(), type_name)
    }

    fn signal_err(&self, comp: ComponentId, signal: &str, source: StoreError) -> WitnessError {
        WitnessError::Signal {
            component: self.describe(comp),
            signal: signal.to_string(),
            source,
        }
    }

    fn layout_err(&self, comp: ComponentId, source: CircuitError) -> WitnessError {
        WitnessError::Layout {
            component: self.describe(comp),
            source,
        }
    }

    /// Read a scalar signal of `comp`.
    pub fn get(&self, comp: ComponentId, signal: &str) -> Result<FieldElement, WitnessError> {
        let offset = self
            .instances
            .signal_offset(self.def, comp, signal)
            .map_err(|e| self.layout_err(comp, e))?;
        self.store
            .read(offset)
            .cloned()
            .map_err(|e| self.signal_err(comp, signal, e))
    }

    /// Read one element of an array signal of `comp`.
    pub fn get_at(
        &self,
        comp: ComponentId,
        signal: &str,
        index: usize,
    ) -> Result<FieldElement, WitnessError> {
        let offset = self
            .instances
            .signal_offset_at(self.def, comp, signal, index)
            .map_err(|e| self.layout_err(comp, e))?;
        self.store
            .read(offset)
            .cloned()
            .map_err(|e| self.signal_err(comp, signal, e))
    }

    /// Assign a scalar signal of `comp` exactly once.
    pub fn set(
        &mut self,
        comp: ComponentId,
        signal: &str,
        value: FieldElement,
    ) -> Result<(), WitnessError> {
        let offset = self
            .instances
            .signal_offset(self.def, comp, signal)
            .map_err(|e| self.layout_err(comp, e))?;
        self.store
            .write(offset, value)
            .map_err(|e| self.signal_err(comp, signal, e))
    }

    /// Assign one element of an array signal of `comp` exactly once.
    pub fn set_at(
        &mut self,
        comp: ComponentId,
        signal: &str,
        index: usize,
        value: FieldElement,
    ) -> Result<(), WitnessError> {
        let offset = self
            .instances
            .signal_offset_at(self.def, comp, signal, index)
            .map_err(|e| self.layout_err(comp, e))?;
        self.store
            .write(offset, value)
            .map_err(|e| self.signal_err(comp, signal, e))
    }

    /// Resolve a named sub-component of `comp`.
    pub fn sub(&self, comp: ComponentId, name: &str) -> Result<ComponentId, WitnessError> {
        self.instances
            .sub(self.def, comp, name)
            .map_err(|e| self.layout_err(comp, e))
    }

    /// Entry `index` of the field constant table (0 and 1).
    pub fn constant(&self, index: usize) -> Option<&'static FieldElement> {
        FieldElement::constant(index)
    }

    /// The field constant one, the value driving fixed sub-component inputs.
    pub fn one(&self) -> &'static FieldElement {
        FieldElement::one()
    }

    /// Pull-evaluate `comp` if it has not run yet. A `Finished` component is
    /// a no-op, so procedures may demand the same sub-component freely.
    pub fn ensure_evaluated(&mut self, comp: ComponentId) -> Result<(), WitnessError> {
        scheduler::evaluate(self, comp)
    }
}
