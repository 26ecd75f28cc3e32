//! Control rules — pure mappings from a sensor snapshot to one command.
//!
//! No rule keeps state, so evaluating one twice with the same inputs always
//! gives the same command.

use crate::config::RoomConfig;

use super::events::WindowPosition;

/// Light is on only when someone is in the room and it is too dark.
pub fn light_command(occupied: bool, enough_light: bool) -> bool {
    occupied && !enough_light
}

/// Open only when the room is not already too warm and the outside air is
/// warmer than the inside air.
///
/// Both comparisons are strict, so a reading exactly on an edge keeps the
/// window closed. A NaN reading fails both comparisons and also closes it.
pub fn window_position(indoor_c: f32, outdoor_c: f32, config: &RoomConfig) -> WindowPosition {
    let indoor_in_band = indoor_c < config.comfort_max_c;
    let outdoor_warmer = outdoor_c - indoor_c > config.window_open_delta_c;

    if indoor_in_band && outdoor_warmer {
        WindowPosition::Open
    } else {
        WindowPosition::Closed
    }
}

/// Servo angle for a window position.
pub fn window_angle(position: WindowPosition, config: &RoomConfig) -> u8 {
    match position {
        WindowPosition::Open => config.window_open_angle,
        WindowPosition::Closed => config.window_closed_angle,
    }
}

/// Fan runs while CO2 is above the threshold.
pub fn fan_command(co2_ppm: u16, config: &RoomConfig) -> bool {
    co2_ppm > config.co2_fan_threshold_ppm
}
