//! Controller configuration
//!
//! Pin assignments and decision thresholds for the room controller. A
//! [`RoomConfig`] is validated once when the controller is built and is
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Servo angle (degrees) that opens the window.
pub const WINDOW_OPEN_ANGLE: u8 = 12;
/// Servo angle (degrees) that closes the window.
pub const WINDOW_CLOSED_ANGLE: u8 = 2;
/// Light actuator pin.
pub const LED_PIN: i32 = pins::LED_PIN;
/// Fan actuator pin.
pub const FAN_PIN: i32 = pins::FAN_PIN;

/// Largest angle a standard hobby servo can reach.
const SERVO_MAX_ANGLE: u8 = 180;

/// Room controller configuration
///
/// The firmware boots with [`RoomConfig::default`]. `Deserialize` is there so
/// a board variant can ship its settings as JSON; nothing loads one yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    // --- Inputs ---
    /// Digital input wired to the occupancy sensor
    pub occupancy_pin: i32,
    /// Digital input wired to the ambient light sensor
    pub light_sensor_pin: i32,

    // --- Outputs ---
    /// Digital output driving the room light
    pub led_pin: i32,
    /// Digital output driving the ventilation fan
    pub fan_pin: i32,

    // --- Window ---
    /// Servo angle for the open window (degrees)
    pub window_open_angle: u8,
    /// Servo angle for the closed window (degrees)
    pub window_closed_angle: u8,
    /// Indoor temperature must be strictly below this (Celsius) to open
    pub comfort_max_c: f32,
    /// Outdoor must exceed indoor by strictly more than this (Celsius) to open
    pub window_open_delta_c: f32,

    // --- Air quality ---
    /// CO2 concentration (ppm) above which the fan runs
    pub co2_fan_threshold_ppm: u16,

    // --- Timing ---
    /// Firmware loop cadence (milliseconds)
    pub poll_interval_ms: u32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            occupancy_pin: pins::OCCUPANCY_GPIO,
            light_sensor_pin: pins::LIGHT_SENSOR_GPIO,
            led_pin: LED_PIN,
            fan_pin: FAN_PIN,

            window_open_angle: WINDOW_OPEN_ANGLE,
            window_closed_angle: WINDOW_CLOSED_ANGLE,
            comfort_max_c: 30.0,
            window_open_delta_c: 0.0,

            co2_fan_threshold_ppm: 800,

            poll_interval_ms: 1000, // 1 Hz
        }
    }
}

impl RoomConfig {
    /// Check every field for a value the controller cannot act on.
    pub fn validate(&self) -> Result<()> {
        if self.window_open_angle > SERVO_MAX_ANGLE || self.window_closed_angle > SERVO_MAX_ANGLE {
            return Err(Error::Config("window angle above 180 degrees"));
        }
        if self.window_open_angle == self.window_closed_angle {
            return Err(Error::Config("window open and closed angles are equal"));
        }
        if !self.comfort_max_c.is_finite() {
            return Err(Error::Config("comfort_max_c must be finite"));
        }
        if !self.window_open_delta_c.is_finite() || self.window_open_delta_c < 0.0 {
            return Err(Error::Config("window_open_delta_c must be finite and non-negative"));
        }
        if self.co2_fan_threshold_ppm == 0 {
            return Err(Error::Config("co2_fan_threshold_ppm must be non-zero"));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be non-zero"));
        }

        let pins = [
            self.occupancy_pin,
            self.light_sensor_pin,
            self.led_pin,
            self.fan_pin,
        ];
        for (i, a) in pins.iter().enumerate() {
            if pins[i + 1..].contains(a) {
                return Err(Error::Config("pin assigned to more than one role"));
            }
        }

        Ok(())
    }
}
