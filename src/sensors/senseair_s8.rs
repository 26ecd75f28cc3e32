//! Senseair S8 NDIR CO2 sensor over Modbus RTU.
//!
//! The S8 answers "read input registers" (function 0x04) on the any-sensor
//! address 0xFE. Input register 3 holds the filtered CO2 value in ppm.
//!
//! ```text
//! request:  FE 04 00 03 00 01 D5 C5
//! response: FE 04 02 HI LO crc_lo crc_hi
//! ```
//!
//! The serial line is abstracted as a [`ModbusLink`] so the framing can be
//! tested on the host; the ESP-IDF UART implementation lives in
//! `adapters::uart_link`.

use crate::error::{Result, SensorError};

const ANY_ADDRESS: u8 = 0xFE;
const FN_READ_INPUT: u8 = 0x04;
const REG_CO2: u16 = 0x0003;
const RESPONSE_LEN: usize = 7;

/// Half-duplex request/response exchange on a serial line.
pub trait ModbusLink {
    /// Send `request` and read the reply into `response`. Returns the
    /// number of bytes received.
    fn transfer(
        &mut self,
        request: &[u8],
        response: &mut [u8],
    ) -> core::result::Result<usize, SensorError>;
}

pub struct SenseairS8<L> {
    link: L,
}

impl<L: ModbusLink> SenseairS8<L> {
    pub fn new(link: L) -> Self {
        Self { link }
    }

    /// Current CO2 concentration in ppm.
    pub fn read_co2_ppm(&mut self) -> Result<u16> {
        let request = read_input_request(REG_CO2, 1);
        let mut response = [0u8; RESPONSE_LEN];
        let n = self.link.transfer(&request, &mut response)?;
        Ok(parse_single_register(&response[..n])?)
    }

    pub fn release(self) -> L {
        self.link
    }
}

fn read_input_request(register: u16, count: u16) -> [u8; 8] {
    let [reg_hi, reg_lo] = register.to_be_bytes();
    let [cnt_hi, cnt_lo] = count.to_be_bytes();
    let mut frame = [ANY_ADDRESS, FN_READ_INPUT, reg_hi, reg_lo, cnt_hi, cnt_lo, 0, 0];
    let [crc_lo, crc_hi] = crc16(&frame[..6]).to_le_bytes();
    frame[6] = crc_lo;
    frame[7] = crc_hi;
    frame
}

fn parse_single_register(frame: &[u8]) -> core::result::Result<u16, SensorError> {
    if frame.len() != RESPONSE_LEN {
        return Err(SensorError::InvalidFrame);
    }
    let (payload, crc) = frame.split_at(RESPONSE_LEN - 2);
    if crc16(payload).to_le_bytes() != [crc[0], crc[1]] {
        return Err(SensorError::ChecksumMismatch);
    }
    // An exception reply sets the top bit of the function code.
    if payload[0] != ANY_ADDRESS || payload[1] != FN_READ_INPUT || payload[2] != 2 {
        return Err(SensorError::InvalidFrame);
    }
    Ok(u16::from_be_bytes([payload[3], payload[4]]))
}

/// CRC-16/MODBUS (poly 0xA001 reflected, init 0xFFFF).
fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc ^= u16::from(byte);
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ 0xA001 } else { crc >> 1 };
        }
    }
    crc
}
