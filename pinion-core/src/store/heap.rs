//! Heap-backed store
//!
//! Slots come from the global allocator on demand and released slots are
//! recycled through a free list. Growth is fallible: allocator
//! exhaustion surfaces as an error on the failing call only, and later
//! calls succeed again once memory is available.

use alloc::vec::Vec;

use super::{PinHandle, PinStore};
use crate::pin::PinInstance;
use crate::registry::RegistryError;

#[derive(Debug, Clone)]
struct Slot {
    pin: Option<PinInstance>,
    generation: u16,
}

/// Growable backing store
///
/// Requires the `alloc` feature.
#[derive(Debug, Default)]
pub struct HeapStore {
    slots: Vec<Slot>,
    /// Indices of released slots, recycled before the vector grows.
    /// Capacity for this list is reserved at insert time, so `release`
    /// itself never allocates.
    free: Vec<u16>,
    live: usize,
}

impl HeapStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PinStore for HeapStore {
    fn try_insert(&mut self, pin: PinInstance) -> Result<PinHandle, RegistryError> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.pin = Some(pin);
            self.live += 1;
            return Ok(PinHandle::new(index, slot.generation));
        }

        // Slot indices must fit the handle
        if self.slots.len() > u16::MAX as usize {
            return Err(RegistryError::Exhausted);
        }
        self.slots
            .try_reserve(1)
            .map_err(|_| RegistryError::Exhausted)?;
        // Keep room on the free list for every slot that exists
        let needed = self.slots.len() + 1;
        if self.free.capacity() < needed {
            self.free
                .try_reserve(needed - self.free.len())
                .map_err(|_| RegistryError::Exhausted)?;
        }

        let index = self.slots.len() as u16;
        self.slots.push(Slot {
            pin: Some(pin),
            generation: 0,
        });
        self.live += 1;
        Ok(PinHandle::new(index, 0))
    }

    fn release(&mut self, handle: PinHandle) -> bool {
        match self.slots.get_mut(handle.index()) {
            Some(slot) if slot.generation == handle.generation() && slot.pin.is_some() => {
                slot.pin = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.live -= 1;
                self.free.push(handle.index() as u16);
                true
            }
            _ => false,
        }
    }

    fn get(&self, handle: PinHandle) -> Option<&PinInstance> {
        self.slots
            .get(handle.index())
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.pin.as_ref())
    }

    fn get_mut(&mut self, handle: PinHandle) -> Option<&mut PinInstance> {
        self.slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.pin.as_mut())
    }

    fn len(&self) -> usize {
        self.live
    }
}
