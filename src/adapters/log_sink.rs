//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each controller event to the `log`
//! facade (ESP-IDF logger → UART / USB-CDC in production). Cycle reports go
//! out as one JSON line so a serial capture can be parsed directly.

use log::{info, warn};

use crate::app::events::RoomEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`RoomEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &RoomEvent) {
        match event {
            RoomEvent::Started => {
                info!("START | controller ready");
            }
            RoomEvent::LightSwitched {
                on,
                occupied,
                enough_light,
            } => {
                info!(
                    "LIGHT | {} | occupied={} enough_light={}",
                    if *on { "ON" } else { "OFF" },
                    occupied,
                    enough_light,
                );
            }
            RoomEvent::WindowMoved {
                position,
                angle,
                indoor_c,
                outdoor_c,
            } => {
                info!(
                    "WINDOW | {:?} ({} deg) | indoor={:.1}\u{00b0}C outdoor={:.1}\u{00b0}C",
                    position, angle, indoor_c, outdoor_c,
                );
            }
            RoomEvent::FanSwitched { on, co2_ppm } => {
                info!("FAN | {} | CO2={}ppm", if *on { "ON" } else { "OFF" }, co2_ppm);
            }
            RoomEvent::CycleCompleted(report) => match serde_json::to_string(report) {
                Ok(json) => info!("TELEM | {}", json),
                Err(e) => warn!("TELEM | encode failed: {}", e),
            },
        }
    }
}
