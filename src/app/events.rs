//! Outbound controller events.
//!
//! The [`RoomController`](super::controller::RoomController) emits these
//! through the [`EventSink`](super::ports::EventSink) port, one per actuator
//! command, carrying the readings that produced the command.

use serde::Serialize;

/// Commanded window position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WindowPosition {
    Open,
    Closed,
}

/// Structured events emitted by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomEvent {
    /// The controller was built and is ready to evaluate rules.
    Started,

    /// Light output written.
    LightSwitched {
        on: bool,
        occupied: bool,
        enough_light: bool,
    },

    /// Servo commanded.
    WindowMoved {
        position: WindowPosition,
        angle: u8,
        indoor_c: f32,
        outdoor_c: f32,
    },

    /// Fan output written.
    FanSwitched { on: bool, co2_ppm: u16 },

    /// One full pass over every rule completed.
    CycleCompleted(CycleReport),
}

/// The commands issued by one [`run_cycle`](super::controller::RoomController::run_cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub light_on: bool,
    pub window: WindowPosition,
    pub fan_on: bool,
}
