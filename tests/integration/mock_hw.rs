//! Mock room hardware for integration tests.
//!
//! Serves a fixed sensor snapshot and records every port call in order, so
//! tests can assert on reads as well as on the command history.

use smartroom::app::events::RoomEvent;
use smartroom::app::ports::{
    AmbientLightSensor, Co2Source, DigitalOutput, EventSink, PresenceSensor, TemperatureSource,
    WindowServo,
};

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HwCall {
    ReadOccupancy(i32),
    ReadLight(i32),
    ReadIndoor,
    ReadOutdoor,
    ReadCo2,
    WritePin { pin: i32, on: bool },
    SetAngle(u8),
}

// ── MockRoom ──────────────────────────────────────────────────

pub struct MockRoom {
    pub occupied: bool,
    pub enough_light: bool,
    pub indoor_c: f32,
    pub outdoor_c: f32,
    pub co2_ppm: u16,
    pub calls: Vec<HwCall>,
}

#[allow(dead_code)]
impl MockRoom {
    pub fn new() -> Self {
        Self {
            occupied: false,
            enough_light: true,
            indoor_c: 21.0,
            outdoor_c: 18.0,
            co2_ppm: 450,
            calls: Vec::new(),
        }
    }

    pub fn with_presence(mut self, occupied: bool, enough_light: bool) -> Self {
        self.occupied = occupied;
        self.enough_light = enough_light;
        self
    }

    pub fn with_temperatures(mut self, indoor_c: f32, outdoor_c: f32) -> Self {
        self.indoor_c = indoor_c;
        self.outdoor_c = outdoor_c;
        self
    }

    pub fn with_co2(mut self, ppm: u16) -> Self {
        self.co2_ppm = ppm;
        self
    }

    /// Every write to `pin`, oldest first.
    pub fn writes_to(&self, pin: i32) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::WritePin { pin: p, on } if *p == pin => Some(*on),
                _ => None,
            })
            .collect()
    }

    /// Every servo command, oldest first.
    pub fn angles(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::SetAngle(a) => Some(*a),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockRoom {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceSensor for MockRoom {
    fn read_occupancy(&mut self, pin: i32) -> bool {
        self.calls.push(HwCall::ReadOccupancy(pin));
        self.occupied
    }
}

impl AmbientLightSensor for MockRoom {
    fn read_enough_light(&mut self, pin: i32) -> bool {
        self.calls.push(HwCall::ReadLight(pin));
        self.enough_light
    }
}

impl TemperatureSource for MockRoom {
    fn read_indoor_celsius(&mut self) -> f32 {
        self.calls.push(HwCall::ReadIndoor);
        self.indoor_c
    }

    fn read_outdoor_celsius(&mut self) -> f32 {
        self.calls.push(HwCall::ReadOutdoor);
        self.outdoor_c
    }
}

impl Co2Source for MockRoom {
    fn read_co2_ppm(&mut self) -> u16 {
        self.calls.push(HwCall::ReadCo2);
        self.co2_ppm
    }
}

impl DigitalOutput for MockRoom {
    fn write_pin(&mut self, pin: i32, on: bool) {
        self.calls.push(HwCall::WritePin { pin, on });
    }
}

impl WindowServo for MockRoom {
    fn set_angle(&mut self, degrees: u8) {
        self.calls.push(HwCall::SetAngle(degrees));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<RoomEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &RoomEvent) {
        self.events.push(event.clone());
    }
}
