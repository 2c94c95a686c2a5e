//! Pinion Hardware Abstraction Layer
//!
//! This crate defines the register-access traits that platform backends
//! implement (memory-mapped GPIO banks, vendor HALs, the software
//! simulator). The pin registry in `pinion-core` is written against
//! these traits only, so the same application code runs on any backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (LED/button loop, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinion-core (pin registry)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinion-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  chip-specific│       │  pinion-hal-  │
//! │    backend    │       │      sim      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::GpioBus`] - register-level digital I/O on a bank of ports

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key types at crate root for convenience
pub use gpio::{GpioBus, PinAddress, PinDirection};
