//! Sensor drivers for the room's bus-attached parts.
//!
//! The occupancy and light inputs are plain GPIO levels and are read
//! directly through [`drivers::hw_init`](crate::drivers::hw_init); only the
//! parts with a wire protocol get a driver here.

pub mod bmp280;
pub mod senseair_s8;
