//! Flat signal storage for one witness computation
//!
//! A [`SignalStore`] holds the value of every signal in the instantiated
//! component tree, addressed by an absolute integer offset. Blocks of slots
//! are handed out by [`SignalStore::reserve`] during instantiation and never
//! overlap, so no two component instances ever contend for the same offset.
//!
//! Every slot is single-assignment: writing an offset twice, or reading an
//! offset before its producer has written it, indicates a dependency-order
//! bug in the evaluation plan and is surfaced as a fatal [`StoreError`]
//! rather than a recoverable condition.
//!
//! Slot 0 is reserved at construction and pre-assigned the field constant 1,
//! matching the conventional witness layout where the first entry is the
//! constant-one signal.

use thiserror::Error;

use crate::field::FieldElement;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("offset {offset} is outside the reserved region (size {size})")]
    OutOfRange { offset: usize, size: usize },

    #[error("signal at offset {offset} was already assigned")]
    AlreadyAssigned { offset: usize },

    #[error("signal at offset {offset} read before assignment")]
    Unassigned { offset: usize },
}

/// Pre-sized storage for every signal value of one witness computation.
#[derive(Debug, Clone)]
pub struct SignalStore {
    slots: Vec<Option<FieldElement>>,
}

impl SignalStore {
    /// Create a store holding only the constant-one signal at offset 0.
    pub fn new() -> SignalStore {
        SignalStore {
            slots: vec![Some(FieldElement::one().clone())],
        }
    }

    /// Reserve a contiguous block of `size` unassigned slots and return its
    /// base offset. Offsets are stable for the lifetime of the store.
    pub fn reserve(&mut self, size: usize) -> usize {
        let base = self.slots.len();
        self.slots.resize(base + size, None);
        base
    }

    /// Total number of reserved slots, including the constant-one slot.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Whether the slot at `offset` has been assigned. Out-of-range offsets
    /// count as unassigned.
    pub fn is_assigned(&self, offset: usize) -> bool {
        matches!(self.slots.get(offset), Some(Some(_)))
    }

    /// Assign the slot at `offset` exactly once.
    pub fn write(&mut self, offset: usize, value: FieldElement) -> Result<(), StoreError> {
        let size = self.slots.len();
        let slot = self
            .slots
            .get_mut(offset)
            .ok_or(StoreError::OutOfRange { offset, size })?;
        if slot.is_some() {
            return Err(StoreError::AlreadyAssigned { offset });
        }
        *slot = Some(value);
        Ok(())
    }

    /// Read a previously assigned slot.
    pub fn read(&self, offset: usize) -> Result<&FieldElement, StoreError> {
        let size = self.slots.len();
        self.slots
            .get(offset)
            .ok_or(StoreError::OutOfRange { offset, size })?
            .as_ref()
            .ok_or(StoreError::Unassigned { offset })
    }

    /// Read `count` contiguous assigned slots starting at `offset`.
    pub fn read_many(&self, offset: usize, count: usize) -> Result<Vec<FieldElement>, StoreError> {
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(self.read(offset + i)?.clone());
        }
        Ok(values)
    }

    /// Consume the store and expose the complete witness vector, one field
    /// element per slot in offset order.
    ///
    /// Fails if any reserved slot is still unassigned; a partially assigned
    /// witness is discarded wholesale rather than emitted.
    pub fn into_witness(self) -> Result<Vec<FieldElement>, StoreError> {
        self.slots
            .into_iter()
            .enumerate()
            .map(|(offset, slot)| slot.ok_or(StoreError::Unassigned { offset }))
            .collect()
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        SignalStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_one_at_offset_zero() {
        let store = SignalStore::new();
        assert_eq!(store.size(), 1);
        assert_eq!(store.read(0).unwrap(), FieldElement::one());
    }

    #[test]
    fn test_reserve_non_overlapping_blocks() {
        let mut store = SignalStore::new();
        let a = store.reserve(4);
        let b = store.reserve(3);
        assert_eq!(a, 1);
        assert_eq!(b, 5);
        assert_eq!(store.size(), 8);
    }

    #[test]
    fn test_write_then_read() {
        let mut store = SignalStore::new();
        let base = store.reserve(2);
        store.write(base, FieldElement::from_u64(7)).unwrap();
        assert_eq!(store.read(base).unwrap(), &FieldElement::from_u64(7));
    }

    #[test]
    fn test_double_write_is_fatal() {
        let mut store = SignalStore::new();
        let base = store.reserve(1);
        store.write(base, FieldElement::from_u64(1)).unwrap();
        let err = store.write(base, FieldElement::from_u64(2)).unwrap_err();
        assert_eq!(err, StoreError::AlreadyAssigned { offset: base });
    }

    #[test]
    fn test_read_before_write_is_fatal() {
        let mut store = SignalStore::new();
        let base = store.reserve(1);
        let err = store.read(base).unwrap_err();
        assert_eq!(err, StoreError::Unassigned { offset: base });
    }

    #[test]
    fn test_read_past_reserved_region() {
        let store = SignalStore::new();
        let err = store.read(10).unwrap_err();
        assert_eq!(err, StoreError::OutOfRange { offset: 10, size: 1 });
    }

    #[test]
    fn test_read_many() {
        let mut store = SignalStore::new();
        let base = store.reserve(2);
        store.write(base, FieldElement::from_u64(3)).unwrap();
        store.write(base + 1, FieldElement::from_u64(4)).unwrap();
        let values = store.read_many(base, 2).unwrap();
        assert_eq!(values, vec![FieldElement::from_u64(3), FieldElement::from_u64(4)]);
    }

    #[test]
    fn test_into_witness_requires_completeness() {
        let mut store = SignalStore::new();
        let base = store.reserve(2);
        store.write(base, FieldElement::from_u64(1)).unwrap();
        let err = store.into_witness().unwrap_err();
        assert_eq!(err, StoreError::Unassigned { offset: base + 1 });
    }

    #[test]
    fn test_into_witness_complete() {
        let mut store = SignalStore::new();
        let base = store.reserve(1);
        store.write(base, FieldElement::from_u64(9)).unwrap();
        let witness = store.into_witness().unwrap();
        assert_eq!(witness.len(), 2);
        assert_eq!(witness[0], *FieldElement::one());
        assert_eq!(witness[1], FieldElement::from_u64(9));
    }
}
