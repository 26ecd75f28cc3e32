//! Port traits — the hexagonal boundary between the control rules and the room.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RoomController (domain)
//! ```
//!
//! One trait per capability kind. The [`RoomController`](super::controller::RoomController)
//! is generic over a single hardware value that implements all of them
//! ([`RoomHardware`]), so production and test builds differ only in which
//! adapter is injected at construction.
//!
//! Ports are infallible by contract: an adapter that cannot reach its
//! peripheral decides for itself what value to hand back.

use super::events::RoomEvent;

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapters: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Digital occupancy input (PIR / distance module).
pub trait PresenceSensor {
    /// Raw level of the occupancy input on `pin`. `true` = occupied.
    fn read_occupancy(&mut self, pin: i32) -> bool;
}

/// Digital ambient-light input.
pub trait AmbientLightSensor {
    /// Raw level of the light input on `pin`. `true` = enough light.
    fn read_enough_light(&mut self, pin: i32) -> bool;
}

/// Indoor and outdoor temperature, queried separately.
pub trait TemperatureSource {
    /// Indoor temperature in Celsius.
    fn read_indoor_celsius(&mut self) -> f32;

    /// Outdoor temperature in Celsius.
    fn read_outdoor_celsius(&mut self) -> f32;
}

/// CO2 concentration.
pub trait Co2Source {
    /// CO2 concentration in ppm.
    fn read_co2_ppm(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (driven adapters: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Binary actuators (light, fan) addressed by pin.
pub trait DigitalOutput {
    fn write_pin(&mut self, pin: i32, on: bool);
}

/// Absolute-position window servo. No ramping.
pub trait WindowServo {
    fn set_angle(&mut self, degrees: u8);
}

/// Everything the controller needs from the room, in one bound.
pub trait RoomHardware:
    PresenceSensor + AmbientLightSensor + TemperatureSource + Co2Source + DigitalOutput + WindowServo
{
}

impl<T> RoomHardware for T where
    T: PresenceSensor + AmbientLightSensor + TemperatureSource + Co2Source + DigitalOutput + WindowServo
{
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller reports each actuator command it issues through this
/// port. Adapters decide where events go.
pub trait EventSink {
    fn emit(&mut self, event: &RoomEvent);
}
