//! Bosch BMP280 barometric sensor — temperature channel only.
//!
//! Talks I2C through [`embedded_hal::i2c::I2c`], so the ESP-IDF `I2cDriver`
//! and a host-side register mock both work. Pressure is never read; the
//! controller only needs Celsius.
//!
//! Compensation uses the datasheet's 32-bit integer formula (§3.11.3) with
//! the three `dig_T*` trim values read once at init.

use embedded_hal::i2c::I2c;

use crate::error::{Result, SensorError};

const REG_CALIB_T: u8 = 0x88;
const REG_CHIP_ID: u8 = 0xD0;
const REG_CTRL_MEAS: u8 = 0xF4;
const REG_TEMP_MSB: u8 = 0xFA;

const CHIP_ID: u8 = 0x58;
/// osrs_t = x1 (bits 7:5 = 001), osrs_p = x1 (bits 4:2 = 001), normal mode (bits 1:0 = 11).
const CTRL_MEAS_NORMAL: u8 = 0b0010_0111;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TempCalibration {
    t1: u16,
    t2: i16,
    t3: i16,
}

pub struct Bmp280<I> {
    i2c: I,
    address: u8,
    calib: Option<TempCalibration>,
}

impl<I: I2c> Bmp280<I> {
    /// The sensor is not usable until [`init`](Self::init) succeeds.
    pub fn new(i2c: I, address: u8) -> Self {
        Self {
            i2c,
            address,
            calib: None,
        }
    }

    /// Verify the chip id, load trim values, and start continuous sampling.
    pub fn init(&mut self) -> Result<()> {
        let mut id = [0u8; 1];
        self.read_regs(REG_CHIP_ID, &mut id)?;
        if id[0] != CHIP_ID {
            return Err(SensorError::WrongChipId(id[0]).into());
        }

        let mut raw = [0u8; 6];
        self.read_regs(REG_CALIB_T, &mut raw)?;
        self.calib = Some(TempCalibration {
            t1: u16::from_le_bytes([raw[0], raw[1]]),
            t2: i16::from_le_bytes([raw[2], raw[3]]),
            t3: i16::from_le_bytes([raw[4], raw[5]]),
        });

        self.i2c
            .write(self.address, &[REG_CTRL_MEAS, CTRL_MEAS_NORMAL])
            .map_err(|_| SensorError::BusFailed)?;
        Ok(())
    }

    /// Latest compensated temperature in Celsius.
    pub fn read_celsius(&mut self) -> Result<f32> {
        let calib = self.calib.ok_or(SensorError::NotInitialized)?;

        let mut raw = [0u8; 3];
        self.read_regs(REG_TEMP_MSB, &mut raw)?;
        let adc_t = (i32::from(raw[0]) << 12) | (i32::from(raw[1]) << 4) | (i32::from(raw[2]) >> 4);

        Ok(compensate(adc_t, calib) as f32 / 100.0)
    }

    pub fn release(self) -> I {
        self.i2c
    }

    fn read_regs(&mut self, reg: u8, buf: &mut [u8]) -> core::result::Result<(), SensorError> {
        self.i2c
            .write_read(self.address, &[reg], buf)
            .map_err(|_| SensorError::BusFailed)
    }
}

/// Temperature in hundredths of a degree Celsius.
fn compensate(adc_t: i32, c: TempCalibration) -> i32 {
    let t1 = i32::from(c.t1);
    let t2 = i32::from(c.t2);
    let t3 = i32::from(c.t3);

    let var1 = (((adc_t >> 3) - (t1 << 1)) * t2) >> 11;
    let var2 = (((((adc_t >> 4) - t1) * ((adc_t >> 4) - t1)) >> 12) * t3) >> 14;
    let t_fine = var1 + var2;
    (t_fine * 5 + 128) >> 8
}
