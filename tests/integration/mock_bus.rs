//! Bus-level mocks for the hardware adapter: a BMP280 register file on
//! I2C, a scripted Senseair S8 on Modbus, and a recording servo PWM channel.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::i2c::{self, I2c, Operation};
use embedded_hal::pwm::{self, SetDutyCycle};

use smartroom::error::SensorError;
use smartroom::sensors::senseair_s8::ModbusLink;

// ── BMP280 on I2C ─────────────────────────────────────────────

pub struct MockBmp280Bus {
    regs: [u8; 256],
    ptr: usize,
    /// Shared so a test can break the bus after the adapter owns it.
    pub fail: Rc<Cell<bool>>,
}

#[allow(dead_code)]
impl MockBmp280Bus {
    /// Datasheet trim values; `adc_t` is the raw 20-bit temperature.
    pub fn new(adc_t: u32) -> Self {
        let mut regs = [0u8; 256];
        regs[0xD0] = 0x58;
        // dig_T1 = 27504, dig_T2 = 26435, dig_T3 = -1000
        regs[0x88..0x8E].copy_from_slice(&[0x70, 0x6B, 0x43, 0x67, 0x18, 0xFC]);
        let mut bus = Self {
            regs,
            ptr: 0,
            fail: Rc::new(Cell::new(false)),
        };
        bus.set_adc(adc_t);
        bus
    }

    pub fn set_adc(&mut self, adc_t: u32) {
        self.regs[0xFA] = (adc_t >> 12) as u8;
        self.regs[0xFB] = (adc_t >> 4) as u8;
        self.regs[0xFC] = ((adc_t & 0x0F) << 4) as u8;
    }
}

impl i2c::ErrorType for MockBmp280Bus {
    type Error = i2c::ErrorKind;
}

impl I2c for MockBmp280Bus {
    fn transaction(&mut self, _address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if self.fail.get() {
            return Err(i2c::ErrorKind::Bus);
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some((&reg, data)) = bytes.split_first() {
                        self.ptr = reg as usize;
                        for (i, b) in data.iter().enumerate() {
                            self.regs[self.ptr + i] = *b;
                        }
                    }
                }
                Operation::Read(buf) => {
                    for (i, b) in buf.iter_mut().enumerate() {
                        *b = self.regs[self.ptr + i];
                    }
                }
            }
        }
        Ok(())
    }
}

// ── Senseair S8 on Modbus ─────────────────────────────────────

pub struct MockS8Link {
    pub reply: Vec<u8>,
    pub fail: Rc<Cell<bool>>,
}

impl MockS8Link {
    /// Pre-computed replies for the ppm values the tests use.
    pub fn reply_for(ppm: u16) -> Vec<u8> {
        match ppm {
            805 => vec![0xFE, 0x04, 0x02, 0x03, 0x25, 0x6C, 0x0F],
            400 => vec![0xFE, 0x04, 0x02, 0x01, 0x90, 0xAC, 0xD8],
            other => panic!("no canned reply for {other} ppm"),
        }
    }

    pub fn new(ppm: u16) -> Self {
        Self {
            reply: Self::reply_for(ppm),
            fail: Rc::new(Cell::new(false)),
        }
    }
}

impl ModbusLink for MockS8Link {
    fn transfer(&mut self, _request: &[u8], response: &mut [u8]) -> Result<usize, SensorError> {
        if self.fail.get() {
            return Err(SensorError::BusFailed);
        }
        let n = self.reply.len().min(response.len());
        response[..n].copy_from_slice(&self.reply[..n]);
        Ok(n)
    }
}

// ── Servo PWM ─────────────────────────────────────────────────

pub struct MockPwm {
    pub duty: Rc<Cell<u16>>,
    pub fail: Rc<Cell<bool>>,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            duty: Rc::new(Cell::new(0)),
            fail: Rc::new(Cell::new(false)),
        }
    }
}

impl pwm::ErrorType for MockPwm {
    type Error = pwm::ErrorKind;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        20_000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.fail.get() {
            return Err(pwm::ErrorKind::Other);
        }
        self.duty.set(duty);
        Ok(())
    }
}
