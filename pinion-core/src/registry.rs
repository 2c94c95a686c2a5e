//! Pin registry
//!
//! Owns the backing store and the bus, and mediates every pin operation:
//! allocation, direction configuration, and state access. The one
//! non-trivial rule lives here: a state write is forwarded to the bus
//! only when the pin is configured as an output, so driving a sensed
//! line can never cause contention on the wire.

use pinion_hal::{GpioBus, PinAddress, PinDirection};

use crate::config::PinAssignment;
use crate::pin::PinInstance;
use crate::store::{PinHandle, PinStore, PoolStore};

#[cfg(feature = "alloc")]
use crate::store::HeapStore;

/// Errors that can occur when registering pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// The backing store has no room for another pin
    Exhausted,
}

const STALE_HANDLE: &str = "pin handle does not reference a live pin";

/// Handle-based pin registry
///
/// Generic over the bus backend `B` and the backing store `S`, chosen
/// when the registry is constructed. Independent registries can coexist,
/// each owning its own arena of pins.
///
/// Handles returned by [`create`](PinRegistry::create) stay valid until
/// [`release`](PinRegistry::release); using a handle after that, or a
/// handle minted by another registry, is a contract violation and
/// panics.
#[derive(Debug)]
pub struct PinRegistry<B, S = PoolStore> {
    bus: B,
    store: S,
}

impl<B: GpioBus> PinRegistry<B> {
    /// Create a registry backed by a fixed pool with the default
    /// capacity of [`DEFAULT_POOL_CAPACITY`](crate::store::DEFAULT_POOL_CAPACITY) pins
    pub fn new(bus: B) -> Self {
        Self::with_store(bus, PoolStore::new())
    }
}

#[cfg(feature = "alloc")]
impl<B: GpioBus> PinRegistry<B, HeapStore> {
    /// Create a registry that allocates pins from the heap
    pub fn new_heap(bus: B) -> Self {
        Self::with_store(bus, HeapStore::new())
    }
}

impl<B: GpioBus, S: PinStore> PinRegistry<B, S> {
    /// Create a registry with an explicit backing store
    ///
    /// Use this to size the pool: `PinRegistry::with_store(bus,
    /// PoolStore::<4>::new())`.
    pub fn with_store(bus: B, store: S) -> Self {
        Self { bus, store }
    }

    /// Register a new pin at `addr`
    ///
    /// The instance starts configured as an input. The bus is not
    /// touched; no hardware effect happens until
    /// [`set_direction`](PinRegistry::set_direction) is called.
    ///
    /// Two pins may be registered at the same address; the registry does
    /// not detect the aliasing.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Exhausted`] when the backing store has no room.
    /// Nothing is created and the bus is not touched.
    pub fn create(&mut self, addr: PinAddress) -> Result<PinHandle, RegistryError> {
        self.store.try_insert(PinInstance::new(addr))
    }

    /// Register a pin from a board assignment and configure its
    /// direction in one step
    ///
    /// # Errors
    ///
    /// [`RegistryError::Exhausted`] when the backing store has no room.
    pub fn create_configured(
        &mut self,
        assignment: &PinAssignment,
    ) -> Result<PinHandle, RegistryError> {
        let handle = self.create(assignment.addr)?;
        self.set_direction(handle, assignment.direction);
        Ok(handle)
    }

    /// Release a pin, returning its slot to the store
    ///
    /// Storage-only: the hardware direction is left as last configured.
    /// The handle is stale afterwards. Returns `false` if it already
    /// was.
    pub fn release(&mut self, handle: PinHandle) -> bool {
        self.store.release(handle)
    }

    /// Configure the pin's direction
    ///
    /// Overwrites the stored direction, then forwards it to the bus with
    /// the pin's address. The bus write happens once per call, even when
    /// the new direction equals the current one.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale or foreign.
    pub fn set_direction(&mut self, handle: PinHandle, direction: PinDirection) {
        let pin = self.store.get_mut(handle).expect(STALE_HANDLE);
        pin.direction = direction;
        let addr = pin.addr();
        self.bus.set_direction(addr, direction);
    }

    /// Drive the pin's level
    ///
    /// Forwarded to the bus only when the pin is configured as an
    /// output. For an input-configured pin the call is a silent no-op;
    /// no error is reported.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale or foreign.
    pub fn set_state(&mut self, handle: PinHandle, high: bool) {
        let pin = self.store.get(handle).expect(STALE_HANDLE);
        if pin.direction().is_output() {
            self.bus.set_state(pin.addr(), high);
        }
    }

    /// Read the pin's level from the bus
    ///
    /// Unlike [`set_state`](PinRegistry::set_state), the read is not
    /// direction-gated: an output-configured pin is still queried, and
    /// the call returns whatever the bus reports for the pin's address.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale or foreign.
    pub fn get_state(&mut self, handle: PinHandle) -> bool {
        let addr = self.store.get(handle).expect(STALE_HANDLE).addr();
        self.bus.get_state(addr)
    }

    /// Current configured direction of a pin
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale or foreign.
    pub fn direction(&self, handle: PinHandle) -> PinDirection {
        self.store.get(handle).expect(STALE_HANDLE).direction()
    }

    /// Physical address a pin is bound to
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale or foreign.
    pub fn addr(&self, handle: PinHandle) -> PinAddress {
        self.store.get(handle).expect(STALE_HANDLE).addr()
    }

    /// Number of live pins
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if no pins are live
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Shared access to the bus backend
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Exclusive access to the bus backend
    ///
    /// Useful for backends with a test-side surface, like level
    /// injection on the simulator.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
