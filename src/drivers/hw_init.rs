//! One-shot GPIO initialisation and raw digital I/O.
//!
//! Configures the controller's digital inputs and outputs using raw ESP-IDF
//! sys calls. Called once from `main()` before the control loop starts.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real `gpio_config` / `gpio_get_level` / `gpio_set_level`.
//! On host/test: a simulated 64-pin bank held in two atomics, so adapter
//! tests can drive inputs and observe outputs.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
#[cfg(target_os = "espidf")]
use log::info;

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU64, Ordering};

use crate::config::RoomConfig;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    InvalidPin(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::InvalidPin(pin) => write!(f, "GPIO {} out of range", pin),
        }
    }
}

impl std::error::Error for HwInitError {}

impl From<HwInitError> for crate::error::Error {
    fn from(e: HwInitError) -> Self {
        match e {
            HwInitError::GpioConfigFailed(_) => Self::Init("gpio_config rejected pin mask"),
            HwInitError::InvalidPin(_) => Self::Init("GPIO number out of range"),
        }
    }
}

fn pin_mask(pin: i32) -> Result<u64, HwInitError> {
    if (0..64).contains(&pin) {
        Ok(1u64 << pin)
    } else {
        Err(HwInitError::InvalidPin(pin))
    }
}

// ── Init ──────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn init_gpio(config: &RoomConfig) -> Result<(), HwInitError> {
    let inputs = pin_mask(config.occupancy_pin)? | pin_mask(config.light_sensor_pin)?;
    let outputs = pin_mask(config.led_pin)? | pin_mask(config.fan_pin)?;

    let in_cfg = gpio_config_t {
        pin_bit_mask: inputs,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: Called once from main() before the control loop; single-threaded.
    let ret = unsafe { gpio_config(&in_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }

    let out_cfg = gpio_config_t {
        pin_bit_mask: outputs,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: as above.
    let ret = unsafe { gpio_config(&out_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }

    // Light and fan start off.
    gpio_write(config.led_pin, false);
    gpio_write(config.fan_pin, false);

    info!("hw_init: GPIO configured (in=0x{:x}, out=0x{:x})", inputs, outputs);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_gpio(config: &RoomConfig) -> Result<(), HwInitError> {
    let outputs = pin_mask(config.led_pin)? | pin_mask(config.fan_pin)?;
    pin_mask(config.occupancy_pin)?;
    pin_mask(config.light_sensor_pin)?;
    SIM_OUTPUTS.fetch_and(!outputs, Ordering::Relaxed);
    log::info!("hw_init(sim): GPIO bank reset");
    Ok(())
}

// ── Digital inputs ────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
static SIM_INPUTS: AtomicU64 = AtomicU64::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: i32) -> bool {
    pin_mask(pin).is_ok_and(|m| SIM_INPUTS.load(Ordering::Relaxed) & m != 0)
}

/// Drive a simulated input level.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_input(pin: i32, high: bool) {
    if let Ok(m) = pin_mask(pin) {
        if high {
            SIM_INPUTS.fetch_or(m, Ordering::Relaxed);
        } else {
            SIM_INPUTS.fetch_and(!m, Ordering::Relaxed);
        }
    }
}

// ── Digital outputs ───────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio(). Main-loop only.
    unsafe {
        gpio_set_level(pin, u32::from(high));
    }
}

#[cfg(not(target_os = "espidf"))]
static SIM_OUTPUTS: AtomicU64 = AtomicU64::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) {
    if let Ok(m) = pin_mask(pin) {
        if high {
            SIM_OUTPUTS.fetch_or(m, Ordering::Relaxed);
        } else {
            SIM_OUTPUTS.fetch_and(!m, Ordering::Relaxed);
        }
    }
}

/// Last level written to a simulated output.
#[cfg(not(target_os = "espidf"))]
pub fn sim_output_level(pin: i32) -> bool {
    pin_mask(pin).is_ok_and(|m| SIM_OUTPUTS.load(Ordering::Relaxed) & m != 0)
}
