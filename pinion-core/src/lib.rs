//! Backend-agnostic GPIO pin registry
//!
//! This crate contains the pin bookkeeping that does not depend on a
//! specific register backend:
//!
//! - Pin instance type and generational handles
//! - Backing stores: fixed-capacity pool and heap-backed
//! - The registry mediating create/configure/set/get, including the
//!   direction gate that keeps writes to input pins off the hardware
//! - Board pin-assignment configuration types
//!
//! All operations are synchronous and bounded-time. Nothing here is
//! synchronized; a registry shared across execution contexts needs
//! external locking.

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod config;
pub mod pin;
pub mod registry;
pub mod store;
