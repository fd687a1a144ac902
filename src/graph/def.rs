//! Component type definitions and the circuit-wide type table
//!
//! A [`ComponentType`] describes the signal block of one component kind:
//! which signals exist, their array dimensions, their role (input, output,
//! intermediate), and which named sub-components the type instantiates.
//! Offsets within the block are assigned in declaration order when the type
//! is built and never change afterwards.

use indexmap::IndexMap;

use super::CircuitError;

/// Identifier of a component type within a [`CircuitDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub(crate) usize);

/// Role of a signal within its component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Driven from outside the component (by the loader for the main
    /// component, by the parent for sub-components). `public` marks signals
    /// visible to a verifier; outputs are always public.
    Input { public: bool },
    Output,
    Intermediate,
}

/// Layout of one named signal: its offset within the owning component's
/// block and its declared array dimensions (empty = scalar).
#[derive(Debug, Clone)]
pub struct SignalSlot {
    pub offset: usize,
    pub dims: Vec<usize>,
    pub kind: SignalKind,
}

impl SignalSlot {
    /// Number of flattened storage slots this signal occupies.
    pub fn len(&self) -> usize {
        self.dims.iter().product::<usize>().max(1)
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    /// Flattened offset of one element of an array signal, row-major.
    /// `in[1]` with dims `[2]` resolves to `offset + 1`.
    pub fn element_offset(&self, signal: &str, index: usize) -> Result<usize, CircuitError> {
        let len = self.len();
        if index >= len {
            return Err(CircuitError::IndexOutOfBounds {
                signal: signal.to_string(),
                index,
                len,
            });
        }
        Ok(self.offset + index)
    }
}

/// One component kind: signal layout plus named sub-components.
#[derive(Debug, Clone)]
pub struct ComponentType {
    name: String,
    signals: IndexMap<String, SignalSlot>,
    subs: IndexMap<String, String>,
    block_size: usize,
}

impl ComponentType {
    pub fn builder(name: &str) -> ComponentTypeBuilder {
        ComponentTypeBuilder {
            name: name.to_string(),
            signals: IndexMap::new(),
            subs: IndexMap::new(),
            next_offset: 0,
            error: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total storage slots for one instance of this type, sub-component
    /// blocks excluded (they live in the sub-instance's own block).
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn signal(&self, name: &str) -> Result<&SignalSlot, CircuitError> {
        self.signals.get(name).ok_or_else(|| CircuitError::UnknownSignal {
            component_type: self.name.clone(),
            signal: name.to_string(),
        })
    }

    pub fn signals(&self) -> impl Iterator<Item = (&str, &SignalSlot)> {
        self.signals.iter().map(|(name, slot)| (name.as_str(), slot))
    }

    /// Declared input signals, the dependency list the scheduler checks
    /// before this type's procedure may run.
    pub fn inputs(&self) -> impl Iterator<Item = (&str, &SignalSlot)> {
        self.signals()
            .filter(|(_, slot)| matches!(slot.kind, SignalKind::Input { .. }))
    }

    pub fn outputs(&self) -> impl Iterator<Item = (&str, &SignalSlot)> {
        self.signals()
            .filter(|(_, slot)| matches!(slot.kind, SignalKind::Output))
    }

    pub fn sub_type_name(&self, sub: &str) -> Result<&str, CircuitError> {
        self.subs
            .get(sub)
            .map(String::as_str)
            .ok_or_else(|| CircuitError::UnknownSubComponent {
                component_type: self.name.clone(),
                sub: sub.to_string(),
            })
    }

    pub fn subs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.subs.iter().map(|(name, ty)| (name.as_str(), ty.as_str()))
    }
}

/// Incremental builder for [`ComponentType`]; the first declaration error is
/// kept and reported by [`ComponentTypeBuilder::build`].
pub struct ComponentTypeBuilder {
    name: String,
    signals: IndexMap<String, SignalSlot>,
    subs: IndexMap<String, String>,
    next_offset: usize,
    error: Option<CircuitError>,
}

impl ComponentTypeBuilder {
    /// `signal input name` - public unless declared private.
    pub fn public_input(self, name: &str, dims: &[usize]) -> Self {
        self.declare(name, dims, SignalKind::Input { public: true })
    }

    /// `signal private input name`
    pub fn private_input(self, name: &str, dims: &[usize]) -> Self {
        self.declare(name, dims, SignalKind::Input { public: false })
    }

    /// `signal output name`
    pub fn output(self, name: &str, dims: &[usize]) -> Self {
        self.declare(name, dims, SignalKind::Output)
    }

    /// `signal name` - an intermediate signal internal to the component.
    pub fn intermediate(self, name: &str, dims: &[usize]) -> Self {
        self.declare(name, dims, SignalKind::Intermediate)
    }

    /// `component name = Type()`
    pub fn sub(mut self, name: &str, type_name: &str) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.subs.insert(name.to_string(), type_name.to_string()).is_some() {
            self.error = Some(CircuitError::DuplicateSubComponent {
                component_type: self.name.clone(),
                sub: name.to_string(),
            });
        }
        self
    }

    fn declare(mut self, name: &str, dims: &[usize], kind: SignalKind) -> Self {
        if self.error.is_some() {
            return self;
        }
        let slot = SignalSlot {
            offset: self.next_offset,
            dims: dims.to_vec(),
            kind,
        };
        self.next_offset += slot.len();
        if self.signals.insert(name.to_string(), slot).is_some() {
            self.error = Some(CircuitError::DuplicateSignal {
                component_type: self.name.clone(),
                signal: name.to_string(),
            });
        }
        self
    }

    pub fn build(self) -> Result<ComponentType, CircuitError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(ComponentType {
            name: self.name,
            signals: self.signals,
            subs: self.subs,
            block_size: self.next_offset,
        })
    }
}

/// Read-only table of component types plus the main (root) type.
///
/// Built once per circuit definition; every sub-component type reference is
/// checked here so resolution never fails later during instantiation.
#[derive(Debug, Clone)]
pub struct CircuitDef {
    types: Vec<ComponentType>,
    by_name: IndexMap<String, TypeId>,
    main: TypeId,
}

impl CircuitDef {
    pub fn new(types: Vec<ComponentType>, main: &str) -> Result<CircuitDef, CircuitError> {
        let mut by_name = IndexMap::new();
        for (index, ty) in types.iter().enumerate() {
            if by_name.insert(ty.name().to_string(), TypeId(index)).is_some() {
                return Err(CircuitError::DuplicateType(ty.name().to_string()));
            }
        }
        // Every sub-component must reference a known type.
        for ty in &types {
            for (_, sub_type) in ty.subs() {
                if !by_name.contains_key(sub_type) {
                    return Err(CircuitError::UnknownType(sub_type.to_string()));
                }
            }
        }
        let main = *by_name
            .get(main)
            .ok_or_else(|| CircuitError::UnknownType(main.to_string()))?;
        Ok(CircuitDef {
            types,
            by_name,
            main,
        })
    }

    pub fn main(&self) -> TypeId {
        self.main
    }

    pub fn ty(&self, id: TypeId) -> &ComponentType {
        &self.types[id.0]
    }

    pub fn type_id(&self, name: &str) -> Result<TypeId, CircuitError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CircuitError::UnknownType(name.to_string()))
    }

    pub fn types(&self) -> impl Iterator<Item = &ComponentType> {
        self.types.iter()
    }
}
