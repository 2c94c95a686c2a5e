//! Backing storage for pin instances
//!
//! The registry never tracks slots itself; it goes through the
//! [`PinStore`] trait, so the fixed-pool and heap-backed strategies can
//! coexist in one build and be chosen when the registry is constructed.

#[cfg(feature = "alloc")]
mod heap;
mod pool;

#[cfg(feature = "alloc")]
pub use heap::HeapStore;
pub use pool::{PoolStore, DEFAULT_POOL_CAPACITY};

use crate::pin::PinInstance;
use crate::registry::RegistryError;

/// Opaque reference to a stored pin instance
///
/// A handle is an arena index paired with a generation counter.
/// Releasing a slot bumps its generation, so a handle to a released pin
/// is detected instead of silently addressing whatever was recycled into
/// the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinHandle {
    index: u16,
    generation: u16,
}

impl PinHandle {
    /// Create a handle for a slot
    ///
    /// Handles are normally minted by a store; constructing one by hand
    /// only makes sense in a [`PinStore`] implementation.
    pub fn new(index: u16, generation: u16) -> Self {
        Self { index, generation }
    }

    /// Slot index this handle refers to
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// Generation the slot had when the handle was minted
    pub fn generation(self) -> u16 {
        self.generation
    }
}

/// Storage strategy for pin instances
///
/// Implementations own the instances; the registry only ever holds
/// [`PinHandle`]s.
pub trait PinStore {
    /// Store a new instance and mint a handle for it
    ///
    /// # Errors
    ///
    /// [`RegistryError::Exhausted`] when no slot can be obtained. The
    /// instance is dropped; no partial state remains.
    fn try_insert(&mut self, pin: PinInstance) -> Result<PinHandle, RegistryError>;

    /// Return a slot to the store
    ///
    /// Returns `false` if the handle was already stale.
    fn release(&mut self, handle: PinHandle) -> bool;

    /// Look up a live instance
    fn get(&self, handle: PinHandle) -> Option<&PinInstance>;

    /// Look up a live instance for mutation
    fn get_mut(&mut self, handle: PinHandle) -> Option<&mut PinInstance>;

    /// Number of live instances
    fn len(&self) -> usize;

    /// Check if no instances are live
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
