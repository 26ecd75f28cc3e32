//! GPIO / peripheral pin assignments for the SmartRoom controller board.
//!
//! These are the defaults baked into [`RoomConfig::default`](crate::config::RoomConfig).
//! The controller itself only ever sees the pin numbers carried by its
//! configuration value. Bus pins (I2C, UART, servo PWM) are bound to typed
//! peripheral objects in `main.rs`, where they are documented.

// ---------------------------------------------------------------------------
// Digital inputs
// ---------------------------------------------------------------------------

/// PIR / infrared distance module. HIGH = someone in the room.
pub const OCCUPANCY_GPIO: i32 = 11;
/// Photoresistor comparator module. HIGH = enough ambient light.
pub const LIGHT_SENSOR_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// Digital outputs
// ---------------------------------------------------------------------------

/// Room light (LED strip MOSFET gate). Active HIGH.
pub const LED_PIN: i32 = 13;
/// Ventilation fan relay. Active HIGH.
pub const FAN_PIN: i32 = 14;

// ---------------------------------------------------------------------------
// Window servo (LEDC PWM, 50 Hz)
// ---------------------------------------------------------------------------

/// Hobby servos expect a 20 ms frame.
pub const SERVO_PWM_FREQ_HZ: u32 = 50;

// ---------------------------------------------------------------------------
// I²C — BMP280 temperature sensors
// ---------------------------------------------------------------------------

/// BMP280 with SDO tied to GND.
pub const BMP280_ADDR: u8 = 0x76;

// ---------------------------------------------------------------------------
// UART1 — Senseair S8 CO2 sensor (Modbus RTU, 9600 8N1)
// ---------------------------------------------------------------------------

pub const S8_UART_BAUD: u32 = 9_600;
