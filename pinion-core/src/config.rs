//! Board pin-assignment configuration
//!
//! Named pin tables, so applications can address pins as `"led_red"`
//! instead of scattering `(port, bit)` constants through the code.

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pinion_hal::{PinAddress, PinDirection};

/// Maximum length of a pin name
pub const MAX_LABEL_LEN: usize = 16;

/// Maximum pin assignments per board
pub const MAX_BOARD_PINS: usize = 32;

/// A named pin on the board
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinAssignment {
    /// Name the pin is looked up by (e.g. "led_red")
    pub name: String<MAX_LABEL_LEN>,
    /// Physical address of the pin
    pub addr: PinAddress,
    /// Direction the pin is configured with at startup
    pub direction: PinDirection,
}

impl PinAssignment {
    /// Create an assignment
    ///
    /// Names longer than [`MAX_LABEL_LEN`] bytes are truncated.
    pub fn new(name: &str, addr: PinAddress, direction: PinDirection) -> Self {
        let mut label = String::new();
        for c in name.chars() {
            if label.push(c).is_err() {
                break;
            }
        }
        Self {
            name: label,
            addr,
            direction,
        }
    }

    /// Create an input assignment
    pub fn input(name: &str, addr: PinAddress) -> Self {
        Self::new(name, addr, PinDirection::Input)
    }

    /// Create an output assignment
    pub fn output(name: &str, addr: PinAddress) -> Self {
        Self::new(name, addr, PinDirection::Output)
    }
}

/// Pin table for one board
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Configuration version for compatibility checks
    pub version: u8,
    /// Pin assignments
    pub pins: Vec<PinAssignment, MAX_BOARD_PINS>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            pins: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an assignment by name
    pub fn find_pin(&self, name: &str) -> Option<&PinAssignment> {
        self.pins.iter().find(|pin| pin.name.as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_constructors() {
        let led = PinAssignment::output("led_red", PinAddress::new(1, 7));
        assert_eq!(led.name.as_str(), "led_red");
        assert_eq!(led.addr, PinAddress::new(1, 7));
        assert!(led.direction.is_output());

        let button = PinAssignment::input("button", PinAddress::new(2, 5));
        assert!(button.direction.is_input());
    }

    #[test]
    fn test_long_names_are_truncated() {
        let pin = PinAssignment::input(
            "a_name_much_longer_than_the_label_fits",
            PinAddress::new(0, 0),
        );
        assert_eq!(pin.name.len(), MAX_LABEL_LEN);
    }

    #[test]
    fn test_empty_config() {
        let config = BoardConfig::new();
        assert_eq!(config.version, 1);
        assert!(config.pins.is_empty());
        assert!(config.find_pin("led_red").is_none());
    }

    #[test]
    fn test_find_pin() {
        let mut config = BoardConfig::new();
        config
            .pins
            .push(PinAssignment::output("led_red", PinAddress::new(1, 7)))
            .unwrap();
        config
            .pins
            .push(PinAssignment::input("button", PinAddress::new(2, 5)))
            .unwrap();

        let led = config.find_pin("led_red").unwrap();
        assert_eq!(led.addr, PinAddress::new(1, 7));
        assert!(config.find_pin("backlight").is_none());
    }
}
