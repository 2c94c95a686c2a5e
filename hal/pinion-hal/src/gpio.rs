//! GPIO register access boundary
//!
//! Provides the addressing types and the bus trait that chip-specific
//! backends implement. Everything here is synchronous and non-blocking;
//! a call is expected to be a plain register access.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical location of a pin: a port identifier and a bit within it
///
/// Out-of-range values are a backend concern; the addressing layer does
/// not constrain them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinAddress {
    /// Port identifier
    pub port: u8,
    /// Bit within the port
    pub bit: u8,
}

impl PinAddress {
    /// Create a new pin address
    pub const fn new(port: u8, bit: u8) -> Self {
        Self { port, bit }
    }
}

/// Configured signal direction of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinDirection {
    /// Pin senses the line (high impedance)
    #[default]
    Input,
    /// Pin drives the line
    Output,
}

impl PinDirection {
    /// Check if the pin drives the line
    pub fn is_output(self) -> bool {
        matches!(self, PinDirection::Output)
    }

    /// Check if the pin senses the line
    pub fn is_input(self) -> bool {
        matches!(self, PinDirection::Input)
    }
}

/// Register-level GPIO access
///
/// One implementor mediates a whole bank of ports, addressed per call by
/// [`PinAddress`]. Implementations perform the actual register
/// manipulation for the specific chip.
pub trait GpioBus {
    /// Configure a pin as input or output
    ///
    /// Must take effect before the next state operation on the same
    /// address is observed.
    fn set_direction(&mut self, addr: PinAddress, direction: PinDirection);

    /// Drive a pin high or low
    ///
    /// Has no defined effect on a pin that is not configured as an
    /// output; callers are expected to invoke it only when output is
    /// intended.
    fn set_state(&mut self, addr: PinAddress, high: bool);

    /// Read the current level of a pin
    ///
    /// Callable regardless of the configured direction.
    fn get_state(&mut self, addr: PinAddress) -> bool;
}
