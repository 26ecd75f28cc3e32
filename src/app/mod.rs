//! Application core — pure domain logic, zero I/O.
//!
//! The room's control rules and the controller that applies them. All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod controller;
pub mod events;
pub mod ports;
pub mod rules;
