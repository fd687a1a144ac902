//! The instantiated component tree
//!
//! [`Instances::instantiate`] walks the static type tree of a
//! [`CircuitDef`], reserving one [`SignalStore`] block per component
//! instance. The resulting arena maps a [`ComponentId`] plus a signal name
//! to an absolute storage offset, which is the only addressing mode the
//! evaluation layer uses.

use indexmap::IndexMap;

use super::{CircuitDef, CircuitError, TypeId};
use crate::store::SignalStore;

/// Handle of a component instance within [`Instances`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub(crate) usize);

impl ComponentId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Lifecycle of a component instance. `Evaluating` guards against re-entry
/// while the instance's own procedure is still on the call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentState {
    Allocated,
    Evaluating,
    Finished,
}

/// One node of the instance tree.
#[derive(Debug, Clone)]
pub struct Instance {
    type_id: TypeId,
    base: usize,
    subs: IndexMap<String, ComponentId>,
    state: ComponentState,
}

impl Instance {
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Base offset of this instance's signal block in the store.
    pub fn base(&self) -> usize {
        self.base
    }

    pub fn state(&self) -> ComponentState {
        self.state
    }
}

/// Arena of component instances rooted at the main component.
#[derive(Debug, Clone)]
pub struct Instances {
    items: Vec<Instance>,
    main: ComponentId,
}

impl Instances {
    /// Build the full instance tree for `def`, reserving a storage block per
    /// instance. The tree shape and every block offset are fixed from here
    /// on; only signal values and per-instance state change afterwards.
    pub fn instantiate(def: &CircuitDef, store: &mut SignalStore) -> Result<Instances, CircuitError> {
        let mut items = Vec::new();
        let main = Self::alloc(def, def.main(), store, &mut items)?;
        Ok(Instances { items, main })
    }

    fn alloc(
        def: &CircuitDef,
        type_id: TypeId,
        store: &mut SignalStore,
        items: &mut Vec<Instance>,
    ) -> Result<ComponentId, CircuitError> {
        let ty = def.ty(type_id);
        let base = store.reserve(ty.block_size());
        let id = ComponentId(items.len());
        items.push(Instance {
            type_id,
            base,
            subs: IndexMap::new(),
            state: ComponentState::Allocated,
        });
        let subs: Vec<(String, String)> = ty
            .subs()
            .map(|(name, ty_name)| (name.to_string(), ty_name.to_string()))
            .collect();
        for (name, sub_type_name) in subs {
            let sub_type = def.type_id(&sub_type_name)?;
            let sub_id = Self::alloc(def, sub_type, store, items)?;
            items[id.0].subs.insert(name, sub_id);
        }
        Ok(id)
    }

    /// The root (main) component instance.
    pub fn main(&self) -> ComponentId {
        self.main
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ComponentId) -> &Instance {
        &self.items[id.0]
    }

    pub fn state(&self, id: ComponentId) -> ComponentState {
        self.items[id.0].state
    }

    pub(crate) fn set_state(&mut self, id: ComponentId, state: ComponentState) {
        self.items[id.0].state = state;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &Instance)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ComponentId(index), item))
    }

    /// Resolve a named sub-component of `id`.
    pub fn sub(&self, def: &CircuitDef, id: ComponentId, name: &str) -> Result<ComponentId, CircuitError> {
        let instance = self.get(id);
        instance.subs.get(name).copied().ok_or_else(|| {
            CircuitError::UnknownSubComponent {
                component_type: def.ty(instance.type_id).name().to_string(),
                sub: name.to_string(),
            }
        })
    }

    /// Absolute store offset of a scalar signal (or the first element of an
    /// array signal) of instance `id`.
    pub fn signal_offset(
        &self,
        def: &CircuitDef,
        id: ComponentId,
        signal: &str,
    ) -> Result<usize, CircuitError> {
        let instance = self.get(id);
        let slot = def.ty(instance.type_id).signal(signal)?;
        Ok(instance.base + slot.offset)
    }

    /// Absolute store offset of one element of an array signal.
    pub fn signal_offset_at(
        &self,
        def: &CircuitDef,
        id: ComponentId,
        signal: &str,
        index: usize,
    ) -> Result<usize, CircuitError> {
        let instance = self.get(id);
        let slot = def.ty(instance.type_id).signal(signal)?;
        Ok(instance.base + slot.element_offset(signal, index)?)
    }

    /// Declared array dimensions of a signal (empty for scalars).
    pub fn signal_dims<'a>(
        &self,
        def: &'a CircuitDef,
        id: ComponentId,
        signal: &str,
    ) -> Result<&'a [usize], CircuitError> {
        let instance = self.get(id);
        let slot = def.ty(instance.type_id).signal(signal)?;
        Ok(&slot.dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ComponentType;

    fn two_level_def() -> CircuitDef {
        let leaf = ComponentType::builder("Leaf")
            .public_input("in", &[2])
            .output("out", &[])
            .build()
            .unwrap();
        let top = ComponentType::builder("Top")
            .public_input("x", &[])
            .output("y", &[])
            .sub("a", "Leaf")
            .sub("b", "Leaf")
            .build()
            .unwrap();
        CircuitDef::new(vec![top, leaf], "Top").unwrap()
    }

    #[test]
    fn test_instantiate_reserves_disjoint_blocks() {
        let def = two_level_def();
        let mut store = SignalStore::new();
        let instances = Instances::instantiate(&def, &mut store).unwrap();
        assert_eq!(instances.len(), 3);
        // slot 0 is the constant one; Top block is 2 slots, each Leaf 3.
        assert_eq!(store.size(), 1 + 2 + 3 + 3);
        let main = instances.get(instances.main());
        assert_eq!(main.base(), 1);
        let a = instances.sub(&def, instances.main(), "a").unwrap();
        let b = instances.sub(&def, instances.main(), "b").unwrap();
        assert_eq!(instances.get(a).base(), 3);
        assert_eq!(instances.get(b).base(), 6);
    }

    #[test]
    fn test_signal_offset_resolution() {
        let def = two_level_def();
        let mut store = SignalStore::new();
        let instances = Instances::instantiate(&def, &mut store).unwrap();
        let a = instances.sub(&def, instances.main(), "a").unwrap();
        assert_eq!(instances.signal_offset(&def, a, "in").unwrap(), 3);
        assert_eq!(instances.signal_offset_at(&def, a, "in", 1).unwrap(), 4);
        assert_eq!(instances.signal_offset(&def, a, "out").unwrap(), 5);
    }

    #[test]
    fn test_signal_dims() {
        let def = two_level_def();
        let mut store = SignalStore::new();
        let instances = Instances::instantiate(&def, &mut store).unwrap();
        let a = instances.sub(&def, instances.main(), "a").unwrap();
        assert_eq!(instances.signal_dims(&def, a, "in").unwrap(), &[2]);
        assert!(instances.signal_dims(&def, a, "out").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_sub_component() {
        let def = two_level_def();
        let mut store = SignalStore::new();
        let instances = Instances::instantiate(&def, &mut store).unwrap();
        assert!(matches!(
            instances.sub(&def, instances.main(), "c"),
            Err(CircuitError::UnknownSubComponent { .. })
        ));
    }

    #[test]
    fn test_initial_state_is_allocated() {
        let def = two_level_def();
        let mut store = SignalStore::new();
        let instances = Instances::instantiate(&def, &mut store).unwrap();
        for (id, _) in instances.iter() {
            assert_eq!(instances.state(id), ComponentState::Allocated);
        }
    }
}
