//! Modbus link over an ESP-IDF UART.
//!
//! Implements [`ModbusLink`] for the Senseair S8 on UART1 (9600 8N1). The S8
//! replies within ~100 ms; anything slower is treated as a bus failure.

#![cfg(target_os = "espidf")]

use esp_idf_hal::delay::TickType;
use esp_idf_hal::uart::UartDriver;

use crate::error::SensorError;
use crate::sensors::senseair_s8::ModbusLink;

const REPLY_TIMEOUT_MS: u64 = 200;

pub struct UartModbusLink<'d> {
    uart: UartDriver<'d>,
}

impl<'d> UartModbusLink<'d> {
    pub fn new(uart: UartDriver<'d>) -> Self {
        Self { uart }
    }
}

impl ModbusLink for UartModbusLink<'_> {
    fn transfer(&mut self, request: &[u8], response: &mut [u8]) -> Result<usize, SensorError> {
        // Drop any stale bytes from a previous timed-out exchange.
        self.uart.clear_rx().map_err(|_| SensorError::BusFailed)?;
        self.uart.write(request).map_err(|_| SensorError::BusFailed)?;

        let timeout = TickType::new_millis(REPLY_TIMEOUT_MS).ticks();
        let mut received = 0;
        while received < response.len() {
            let n = self
                .uart
                .read(&mut response[received..], timeout)
                .map_err(|_| SensorError::BusFailed)?;
            if n == 0 {
                break;
            }
            received += n;
        }
        Ok(received)
    }
}
