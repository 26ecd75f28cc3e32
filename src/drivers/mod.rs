//! Actuator drivers and GPIO initialisation.

pub mod hw_init;
pub mod servo;
