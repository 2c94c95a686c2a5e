//! Fixed-capacity pool store
//!
//! All slots are reserved up front; creating a pin claims the first free
//! slot. Suited to bare-metal targets where the set of pins is known and
//! bounded.

use super::{PinHandle, PinStore};
use crate::pin::PinInstance;
use crate::registry::RegistryError;

/// Pool capacity used when none is given
pub const DEFAULT_POOL_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
struct Slot {
    pin: Option<PinInstance>,
    generation: u16,
}

impl Slot {
    const EMPTY: Self = Self {
        pin: None,
        generation: 0,
    };
}

/// Fixed-capacity backing store
///
/// Insertion scans for the lowest free slot, so released slots are
/// reused lowest-index first.
#[derive(Debug)]
pub struct PoolStore<const N: usize = { DEFAULT_POOL_CAPACITY }> {
    slots: [Slot; N],
    live: usize,
}

impl<const N: usize> PoolStore<N> {
    /// Create a pool with all `N` slots free
    pub const fn new() -> Self {
        Self {
            slots: [Slot::EMPTY; N],
            live: 0,
        }
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for PoolStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PinStore for PoolStore<N> {
    fn try_insert(&mut self, pin: PinInstance) -> Result<PinHandle, RegistryError> {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.pin.is_none() {
                slot.pin = Some(pin);
                self.live += 1;
                return Ok(PinHandle::new(index as u16, slot.generation));
            }
        }
        Err(RegistryError::Exhausted)
    }

    fn release(&mut self, handle: PinHandle) -> bool {
        match self.slots.get_mut(handle.index()) {
            Some(slot) if slot.generation == handle.generation() && slot.pin.is_some() => {
                slot.pin = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.live -= 1;
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
