//! Room controller — the hexagonal core.
//!
//! [`RoomController`] owns its configuration, the injected hardware, and an
//! event sink. Every public method reads the sensors it needs, writes exactly
//! one actuator command, and returns. Nothing carries over between calls.
//!
//! ```text
//!  PresenceSensor ─┐                           ┌─▶ DigitalOutput (light, fan)
//!  AmbientLight   ─┤   ┌────────────────────┐  ├─▶ WindowServo
//!  Temperature    ─┼──▶│   RoomController   │──┤
//!  Co2Source      ─┘   │  light·window·fan  │  └─▶ EventSink
//!                      └────────────────────┘
//! ```

use log::{debug, info};

use crate::config::RoomConfig;
use crate::error::Result;

use super::events::{CycleReport, RoomEvent, WindowPosition};
use super::ports::{EventSink, RoomHardware};
use super::rules;

/// Evaluates the three room rules against injected hardware.
pub struct RoomController<H, E> {
    config: RoomConfig,
    hw: H,
    sink: E,
}

impl<H: RoomHardware, E: EventSink> RoomController<H, E> {
    /// Validate `config` and take ownership of the hardware and sink.
    pub fn new(config: RoomConfig, hw: H, mut sink: E) -> Result<Self> {
        config.validate()?;
        sink.emit(&RoomEvent::Started);
        info!(
            "RoomController ready (led={}, fan={}, co2>{}ppm, indoor<{}C)",
            config.led_pin, config.fan_pin, config.co2_fan_threshold_ppm, config.comfort_max_c
        );
        Ok(Self { config, hw, sink })
    }

    // ── Sensor queries ────────────────────────────────────────

    /// Raw occupancy level on the configured pin.
    pub fn check_room_occupancy(&mut self) -> bool {
        self.hw.read_occupancy(self.config.occupancy_pin)
    }

    /// Raw light-sufficiency level on the configured pin.
    pub fn check_enough_light(&mut self) -> bool {
        self.hw.read_enough_light(self.config.light_sensor_pin)
    }

    // ── Rules ─────────────────────────────────────────────────

    /// Switch the light on when the room is occupied and too dark.
    pub fn manage_light_level(&mut self) {
        self.apply_light();
    }

    /// Open or close the window from the indoor and outdoor temperatures.
    pub fn manage_window(&mut self) {
        self.apply_window();
    }

    /// Run the fan while CO2 is above threshold.
    pub fn monitor_air_quality(&mut self) {
        self.apply_fan();
    }

    /// Evaluate every rule once: light, then window, then fan.
    pub fn run_cycle(&mut self) -> CycleReport {
        let report = CycleReport {
            light_on: self.apply_light(),
            window: self.apply_window(),
            fan_on: self.apply_fan(),
        };
        self.sink.emit(&RoomEvent::CycleCompleted(report));
        report
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// Give the hardware and sink back (e.g. to inspect a mock).
    pub fn into_parts(self) -> (H, E) {
        (self.hw, self.sink)
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_light(&mut self) -> bool {
        let occupied = self.check_room_occupancy();
        let enough_light = self.check_enough_light();
        let on = rules::light_command(occupied, enough_light);

        self.hw.write_pin(self.config.led_pin, on);
        debug!("light: occupied={} enough_light={} -> {}", occupied, enough_light, on);
        self.sink.emit(&RoomEvent::LightSwitched {
            on,
            occupied,
            enough_light,
        });
        on
    }

    fn apply_window(&mut self) -> WindowPosition {
        // Indoor first, then outdoor.
        let indoor_c = self.hw.read_indoor_celsius();
        let outdoor_c = self.hw.read_outdoor_celsius();
        let position = rules::window_position(indoor_c, outdoor_c, &self.config);
        let angle = rules::window_angle(position, &self.config);

        self.hw.set_angle(angle);
        debug!(
            "window: indoor={:.1}C outdoor={:.1}C -> {:?} ({} deg)",
            indoor_c, outdoor_c, position, angle
        );
        self.sink.emit(&RoomEvent::WindowMoved {
            position,
            angle,
            indoor_c,
            outdoor_c,
        });
        position
    }

    fn apply_fan(&mut self) -> bool {
        let co2_ppm = self.hw.read_co2_ppm();
        let on = rules::fan_command(co2_ppm, &self.config);

        self.hw.write_pin(self.config.fan_pin, on);
        debug!("fan: co2={}ppm -> {}", co2_ppm, on);
        self.sink.emit(&RoomEvent::FanSwitched { on, co2_ppm });
        on
    }
}
