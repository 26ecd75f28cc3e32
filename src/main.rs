//! SmartRoom Firmware — Main Entry Point
//!
//! Builds the adapters, injects them into the [`RoomController`], and then
//! acts as the controller's external scheduler: one `run_cycle()` every
//! `poll_interval_ms`.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                    │
//! │                                                          │
//! │  HardwareAdapter                        LogEventSink     │
//! │  GPIO · BMP280×2 · S8 · servo           (EventSink)      │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────         │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        RoomController (pure logic)             │      │
//! │  │        light · window · fan                    │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::ledc::config::TimerConfig;
use esp_idf_hal::ledc::{LedcDriver, LedcTimerDriver, Resolution};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::prelude::*;
use esp_idf_hal::uart::{self, UartDriver};

use smartroom::adapters::hardware::HardwareAdapter;
use smartroom::adapters::log_sink::LogEventSink;
use smartroom::adapters::uart_link::UartModbusLink;
use smartroom::app::controller::RoomController;
use smartroom::config::RoomConfig;
use smartroom::error::Error;
use smartroom::drivers::hw_init;
use smartroom::drivers::servo::ServoDriver;
use smartroom::pins;
use smartroom::sensors::bmp280::Bmp280;
use smartroom::sensors::senseair_s8::SenseairS8;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("SmartRoom v{}", env!("CARGO_PKG_VERSION"));

    let config = RoomConfig::default();
    config.validate()?;

    // ── 2. Digital I/O ────────────────────────────────────────
    hw_init::init_gpio(&config).map_err(Error::from)?;

    // ── 3. Buses ──────────────────────────────────────────────
    let p = Peripherals::take()?;

    // One BMP280 per bus so both sit at the default address.
    let i2c_cfg = I2cConfig::new().baudrate(100.kHz().into());
    // Indoor: SDA GPIO8, SCL GPIO9.
    let indoor_bus = I2cDriver::new(p.i2c0, p.pins.gpio8, p.pins.gpio9, &i2c_cfg)?;
    // Outdoor, cable run through the window frame: SDA GPIO6, SCL GPIO7.
    let outdoor_bus = I2cDriver::new(p.i2c1, p.pins.gpio6, p.pins.gpio7, &i2c_cfg)?;

    // Senseair S8, Modbus RTU 9600 8N1: TX GPIO17, RX GPIO18.
    let uart_cfg = uart::config::Config::new().baudrate(Hertz(pins::S8_UART_BAUD));
    let s8_uart = UartDriver::new(
        p.uart1,
        p.pins.gpio17,
        p.pins.gpio18,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &uart_cfg,
    )?;

    let servo_timer = LedcTimerDriver::new(
        p.ledc.timer0,
        &TimerConfig::new()
            .frequency(pins::SERVO_PWM_FREQ_HZ.Hz().into())
            .resolution(Resolution::Bits14),
    )?;
    // Window servo signal on GPIO5.
    let servo_pwm = LedcDriver::new(p.ledc.channel0, &servo_timer, p.pins.gpio5)?;

    // ── 4. Sensor drivers ─────────────────────────────────────
    let mut indoor = Bmp280::new(indoor_bus, pins::BMP280_ADDR);
    if let Err(e) = indoor.init() {
        warn!("indoor BMP280 init failed: {} (window will stay closed)", e);
    }
    let mut outdoor = Bmp280::new(outdoor_bus, pins::BMP280_ADDR);
    if let Err(e) = outdoor.init() {
        warn!("outdoor BMP280 init failed: {} (window will stay closed)", e);
    }
    let co2 = SenseairS8::new(UartModbusLink::new(s8_uart));

    // ── 5. Controller ─────────────────────────────────────────
    let hw = HardwareAdapter::new(indoor, outdoor, co2, ServoDriver::new(servo_pwm));
    let mut controller = RoomController::new(config.clone(), hw, LogEventSink::new())?;

    info!("System ready. Polling every {} ms.", config.poll_interval_ms);

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        controller.run_cycle();
        FreeRtos::delay_ms(config.poll_interval_ms);
    }
}
