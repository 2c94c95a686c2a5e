//! Software-simulated GPIO backend
//!
//! Implements the `pinion-hal` traits against a bank of in-memory port
//! registers, so registry-level code can be exercised on a host without
//! any target hardware. Levels can be injected from the outside to stand
//! in for external signals (buttons, sensors).

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::SimGpioBus;
