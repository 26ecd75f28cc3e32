//! Hardware adapter — bridges real peripherals to the controller's ports.
//!
//! Owns the bus drivers and exposes them through every capability trait.
//! This is the only module that touches peripherals. On non-espidf targets
//! GPIO goes to the simulated bank in [`hw_init`] and the buses are whatever
//! mock the caller injects.
//!
//! ## Fault policy
//!
//! Ports cannot fail, so failures stop here: a bad read is logged and the
//! last good value is returned instead, for at most [`MAX_HELD_READS`]
//! consecutive failures. After that, and before any good read, the sensor
//! reports its safe value: NaN (window stays closed) or 0 ppm (fan stays
//! off).

use embedded_hal::i2c::I2c;
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::{
    AmbientLightSensor, Co2Source, DigitalOutput, PresenceSensor, TemperatureSource, WindowServo,
};
use crate::drivers::hw_init;
use crate::drivers::servo::ServoDriver;
use crate::sensors::bmp280::Bmp280;
use crate::sensors::senseair_s8::{ModbusLink, SenseairS8};

/// Consecutive failed reads that still report the last good value.
pub const MAX_HELD_READS: u8 = 3;

/// Last good value of one sensor and the failures seen since.
#[derive(Debug, Clone, Copy)]
struct HeldReading<T> {
    value: T,
    safe: T,
    misses: u8,
}

impl<T: Copy> HeldReading<T> {
    const fn new(safe: T) -> Self {
        Self {
            value: safe,
            safe,
            misses: 0,
        }
    }

    fn accept(&mut self, value: T) -> T {
        self.value = value;
        self.misses = 0;
        value
    }

    fn miss(&mut self) -> T {
        self.misses = self.misses.saturating_add(1);
        if self.misses > MAX_HELD_READS {
            self.value = self.safe;
        }
        self.value
    }
}

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I, L, P> {
    indoor: Bmp280<I>,
    outdoor: Bmp280<I>,
    co2: SenseairS8<L>,
    servo: ServoDriver<P>,
    indoor_c: HeldReading<f32>,
    outdoor_c: HeldReading<f32>,
    co2_ppm: HeldReading<u16>,
}

impl<I: I2c, L: ModbusLink, P: SetDutyCycle> HardwareAdapter<I, L, P> {
    /// Both temperature drivers should already be initialised; one that is
    /// not simply reports its fallback value.
    pub fn new(indoor: Bmp280<I>, outdoor: Bmp280<I>, co2: SenseairS8<L>, servo: ServoDriver<P>) -> Self {
        Self {
            indoor,
            outdoor,
            co2,
            servo,
            indoor_c: HeldReading::new(f32::NAN),
            outdoor_c: HeldReading::new(f32::NAN),
            co2_ppm: HeldReading::new(0),
        }
    }

    /// Last angle the servo accepted.
    pub fn servo_angle(&self) -> Option<u8> {
        self.servo.angle()
    }
}

// ── Sensor ports ──────────────────────────────────────────────

impl<I, L, P> PresenceSensor for HardwareAdapter<I, L, P> {
    fn read_occupancy(&mut self, pin: i32) -> bool {
        hw_init::gpio_read(pin)
    }
}

impl<I, L, P> AmbientLightSensor for HardwareAdapter<I, L, P> {
    fn read_enough_light(&mut self, pin: i32) -> bool {
        hw_init::gpio_read(pin)
    }
}

impl<I: I2c, L, P> TemperatureSource for HardwareAdapter<I, L, P> {
    fn read_indoor_celsius(&mut self) -> f32 {
        match self.indoor.read_celsius() {
            Ok(t) => self.indoor_c.accept(t),
            Err(e) => {
                let held = self.indoor_c.miss();
                warn!("indoor BMP280 read failed: {} (using {:.1}C)", e, held);
                held
            }
        }
    }

    fn read_outdoor_celsius(&mut self) -> f32 {
        match self.outdoor.read_celsius() {
            Ok(t) => self.outdoor_c.accept(t),
            Err(e) => {
                let held = self.outdoor_c.miss();
                warn!("outdoor BMP280 read failed: {} (using {:.1}C)", e, held);
                held
            }
        }
    }
}

impl<I, L: ModbusLink, P> Co2Source for HardwareAdapter<I, L, P> {
    fn read_co2_ppm(&mut self) -> u16 {
        match self.co2.read_co2_ppm() {
            Ok(ppm) => self.co2_ppm.accept(ppm),
            Err(e) => {
                let held = self.co2_ppm.miss();
                warn!("S8 read failed: {} (using {}ppm)", e, held);
                held
            }
        }
    }
}

// ── Actuator ports ────────────────────────────────────────────

impl<I, L, P> DigitalOutput for HardwareAdapter<I, L, P> {
    fn write_pin(&mut self, pin: i32, on: bool) {
        hw_init::gpio_write(pin, on);
    }
}

impl<I, L, P: SetDutyCycle> WindowServo for HardwareAdapter<I, L, P> {
    fn set_angle(&mut self, degrees: u8) {
        if let Err(e) = self.servo.set_angle(degrees) {
            warn!("window servo to {} deg failed: {}", degrees, e);
        }
    }
}
