//! Window servo driver (standard 50 Hz hobby servo).
//!
//! Absolute positioning: the angle maps linearly onto a 500–2500 µs pulse
//! inside the 20 ms frame. There is no ramping; the servo moves as fast as
//! it can to the commanded angle.
//!
//! Generic over [`SetDutyCycle`] so the same driver runs on an ESP-IDF
//! `LedcDriver` and on a host-side mock.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::{ActuatorError, Result};

const FRAME_US: u16 = 20_000;
const MIN_PULSE_US: u16 = 500;
const MAX_PULSE_US: u16 = 2_500;
const MAX_ANGLE: u8 = 180;

pub struct ServoDriver<P> {
    pwm: P,
    angle: Option<u8>,
}

impl<P: SetDutyCycle> ServoDriver<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm, angle: None }
    }

    /// Command an absolute angle. Values above 180 are clamped.
    pub fn set_angle(&mut self, degrees: u8) -> Result<()> {
        let degrees = degrees.min(MAX_ANGLE);
        self.pwm
            .set_duty_cycle_fraction(pulse_us(degrees), FRAME_US)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        self.angle = Some(degrees);
        Ok(())
    }

    /// Last angle successfully commanded, if any.
    pub fn angle(&self) -> Option<u8> {
        self.angle
    }

    pub fn release(self) -> P {
        self.pwm
    }
}

fn pulse_us(degrees: u8) -> u16 {
    let span = u32::from(MAX_PULSE_US - MIN_PULSE_US);
    MIN_PULSE_US + (u32::from(degrees) * span / u32::from(MAX_ANGLE)) as u16
}
