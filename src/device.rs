//! High-level driver API for the IIM-42652
//!
//! This module provides a user-friendly interface to the IIM-42652 sensor,
//! handling register bank switching, device reset, power-up configuration,
//! and data reading.

use crate::power::{GYRO_MIN_ON_TIME_MS, PowerConfig};
use crate::registers::Iim42652 as RegisterDevice;
use crate::sensors::{AccelDataG, AccelFullScale, GyroDataDps, GyroFullScale};
use crate::{Bank, Error, WHO_AM_I_VALUE};

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Temperature sensor sensitivity in LSB/°C
///
/// From the datasheet: Temp_degC = (`TEMP_DATA` / 132.48) + 25
const TEMP_LSB_PER_DEG_C: f32 = 132.48;

/// Temperature sensor offset in °C (value of a zero raw reading)
const TEMP_OFFSET_DEG_C: f32 = 25.0;

/// Settle time around the soft reset bit and between reset polls, in ms
const RESET_SETTLE_MS: u32 = 5;

/// Settle time after each sensor data read, in ms
const READ_SETTLE_MS: u32 = 5;

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// Main driver for the IIM-42652
///
/// The driver owns the register interface and a delay provider, because the
/// device requires fixed settle waits during reset, power-up, and after data
/// reads.
///
/// A driver instance assumes exclusive ownership of the bus device: the
/// register bank selector is global mutable state on the chip, so concurrent
/// access from multiple contexts must be serialized externally.
pub struct Iim42652Driver<I, D> {
    device: RegisterDevice<I>,
    delay: D,
    current_bank: Bank,
}

#[cfg(not(feature = "async"))]
impl<I, D> Iim42652Driver<I, D>
where
    I: RegisterInterface<AddressType = u8>,
    D: embedded_hal::delay::DelayNs,
{
    /// Create a new IIM-42652 driver instance
    ///
    /// This verifies the `WHO_AM_I` register, then performs a soft reset and
    /// powers the gyroscope and accelerometer into low-noise mode. The driver
    /// is ready for data reads when this returns.
    ///
    /// Note that [`reset()`](Self::reset) blocks until the device reports the
    /// reset as complete, with no upper bound: a non-responsive device hangs
    /// the caller rather than erroring out.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value (checked before
    ///   any other register access)
    ///
    /// # Example
    ///
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Iim42652Driver::new(interface, delay)?;
    /// let accel = imu.read_acceleration()?;
    /// ```
    pub fn new(interface: I, delay: D) -> Result<Self, Error<I::Error>> {
        let device = RegisterDevice::new(interface);
        let mut driver = Self {
            device,
            delay,
            current_bank: Bank::Bank0,
        };

        // Verify WHO_AM_I
        driver.select_bank(Bank::Bank0)?;
        let who_am_i = driver.read_who_am_i()?;

        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }

        driver.reset()?;
        driver.initialize()?;

        Ok(driver)
    }

    /// Select a register bank
    ///
    /// The bank selector is write-only routing state on the device and may be
    /// changed behind the driver's back (e.g. by a glitch or a shared-bus
    /// peer), so the write is issued unconditionally; the mirrored
    /// `current_bank` field records the last selection but is never used to
    /// skip the write.
    ///
    /// `REG_BANK_SEL` decodes identically in every bank, so this is valid
    /// regardless of the currently selected bank.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn select_bank(&mut self, bank: Bank) -> Result<(), Error<I::Error>> {
        self.device.reg_bank_sel().write(|w| {
            w.set_bank_sel(bank as u8);
        })?;
        self.current_bank = bank;
        Ok(())
    }

    /// The last bank selected through this driver
    #[must_use]
    pub fn current_bank(&self) -> Bank {
        self.current_bank
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x6F for a valid IIM-42652
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        self.select_bank(Bank::Bank0)?;
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Reset the internal registers and restore the default settings
    ///
    /// Sets the soft reset bit and polls it until the device clears it,
    /// sleeping 5 ms between polls. The poll has no timeout: if the device
    /// never completes the reset, this blocks forever.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset(&mut self) -> Result<(), Error<I::Error>> {
        self.select_bank(Bank::Bank0)?;
        self.delay.delay_ms(RESET_SETTLE_MS);

        self.device.device_config().modify(|w| {
            w.set_soft_reset_config(true);
        })?;
        self.delay.delay_ms(RESET_SETTLE_MS);

        // The bit self-clears once the reset has completed
        loop {
            let reg = self.device.device_config().read()?;
            if !reg.soft_reset_config() {
                break;
            }
            self.delay.delay_ms(RESET_SETTLE_MS);
        }

        Ok(())
    }

    /// Configure the sensors with the default settings
    ///
    /// Powers the gyroscope and accelerometer into low-noise mode
    /// (`PWR_MGMT0` = 0x0F) and waits out the minimum gyroscope on-time
    /// before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn initialize(&mut self) -> Result<(), Error<I::Error>> {
        self.set_power_config(PowerConfig::default())?;
        self.delay.delay_ms(GYRO_MIN_ON_TIME_MS);
        Ok(())
    }

    /// Write a power configuration to `PWR_MGMT0`
    ///
    /// Does not wait for sensor start-up; callers that enable the gyroscope
    /// must respect [`GYRO_MIN_ON_TIME_MS`] before relying on its output
    /// (see [`initialize()`](Self::initialize)).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_power_config(&mut self, config: PowerConfig) -> Result<(), Error<I::Error>> {
        self.select_bank(Bank::Bank0)?;
        self.device.pwr_mgmt_0().write(|w| {
            w.set_accel_mode(config.accel_mode as u8);
            w.set_gyro_mode(config.gyro_mode as u8);
            w.set_idle(config.idle);
            w.set_temp_dis(config.temp_disabled);
        })?;
        Ok(())
    }

    /// Read accelerometer data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel(&mut self) -> Result<AccelData, Error<I::Error>> {
        // Read all 6 bytes atomically to prevent torn reads
        // Register addresses: ACCEL_DATA_X1 (0x1F) through ACCEL_DATA_Z0 (0x24)
        const ACCEL_DATA_X1: u8 = 0x1F;
        let mut buffer = [0u8; 6];
        self.select_bank(Bank::Bank0)?;
        self.device
            .interface
            .read_register(ACCEL_DATA_X1, 48, &mut buffer)?;
        self.delay.delay_ms(READ_SETTLE_MS);

        let x = i16::from_be_bytes([buffer[0], buffer[1]]);
        let y = i16::from_be_bytes([buffer[2], buffer[3]]);
        let z = i16::from_be_bytes([buffer[4], buffer[5]]);

        Ok(AccelData { x, y, z })
    }

    /// Read gyroscope data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro(&mut self) -> Result<GyroData, Error<I::Error>> {
        // Read all 6 bytes atomically to prevent torn reads
        // Register addresses: GYRO_DATA_X1 (0x25) through GYRO_DATA_Z0 (0x2A)
        const GYRO_DATA_X1: u8 = 0x25;
        let mut buffer = [0u8; 6];
        self.select_bank(Bank::Bank0)?;
        self.device
            .interface
            .read_register(GYRO_DATA_X1, 48, &mut buffer)?;
        self.delay.delay_ms(READ_SETTLE_MS);

        let x = i16::from_be_bytes([buffer[0], buffer[1]]);
        let y = i16::from_be_bytes([buffer[2], buffer[3]]);
        let z = i16::from_be_bytes([buffer[4], buffer[5]]);

        Ok(GyroData { x, y, z })
    }

    /// Read temperature sensor
    ///
    /// Returns raw 16-bit signed value.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<i16, Error<I::Error>> {
        // Read both bytes atomically to prevent torn reads
        // Register addresses: TEMP_DATA1 (0x1D) through TEMP_DATA0 (0x1E)
        const TEMP_DATA1: u8 = 0x1D;
        let mut buffer = [0u8; 2];
        self.select_bank(Bank::Bank0)?;
        self.device
            .interface
            .read_register(TEMP_DATA1, 16, &mut buffer)?;
        self.delay.delay_ms(READ_SETTLE_MS);

        // Combine high and low bytes (big-endian)
        let temp_raw = i16::from_be_bytes([buffer[0], buffer[1]]);

        Ok(temp_raw)
    }

    /// Read temperature in degrees Celsius
    ///
    /// Convenience method that reads the temperature sensor and converts to
    /// Celsius.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.read_temperature()?;
        Ok(Self::temperature_to_celsius(raw))
    }

    /// Read acceleration in g
    ///
    /// Scaled with the ±16 g power-on full-scale sensitivity (2048 LSB/g).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_acceleration(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = self.read_accel()?;
        Ok(AccelDataG::from_raw(
            raw.x,
            raw.y,
            raw.z,
            AccelFullScale::default().sensitivity(),
        ))
    }

    /// Read angular velocity in degrees per second
    ///
    /// Scaled with the ±2000 °/s power-on full-scale sensitivity
    /// (16.4 LSB/(°/s)).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_dps(&mut self) -> Result<GyroDataDps, Error<I::Error>> {
        let raw = self.read_gyro()?;
        Ok(GyroDataDps::from_raw(
            raw.x,
            raw.y,
            raw.z,
            GyroFullScale::default().sensitivity(),
        ))
    }

    /// Consume the driver and return the interface and delay provider
    pub fn release(self) -> (I, D) {
        (self.device.interface, self.delay)
    }
}

impl<I, D> Iim42652Driver<I, D> {
    /// Convert raw temperature to degrees Celsius
    ///
    /// From the datasheet: Temp_degC = (`TEMP_DATA` / 132.48) + 25
    #[must_use]
    pub fn temperature_to_celsius(raw: i16) -> f32 {
        (f32::from(raw) / TEMP_LSB_PER_DEG_C) + TEMP_OFFSET_DEG_C
    }
}

#[cfg(feature = "async")]
impl<I, D> Iim42652Driver<I, D>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
    D: embedded_hal_async::delay::DelayNs,
{
    /// Create a new IIM-42652 driver instance
    ///
    /// Async variant of the blocking constructor: verifies `WHO_AM_I`, then
    /// resets and powers the sensors into low-noise mode. The reset poll has
    /// no timeout; a non-responsive device stalls the future indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the
    /// `WHO_AM_I` register contains an unexpected value.
    pub async fn new(interface: I, delay: D) -> Result<Self, Error<I::Error>> {
        let device = RegisterDevice::new(interface);
        let mut driver = Self {
            device,
            delay,
            current_bank: Bank::Bank0,
        };

        // Verify WHO_AM_I
        driver.select_bank(Bank::Bank0).await?;
        let who_am_i = driver.read_who_am_i().await?;

        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }

        driver.reset().await?;
        driver.initialize().await?;

        Ok(driver)
    }

    /// Select a register bank
    ///
    /// The write is issued unconditionally; the mirrored `current_bank`
    /// field is never used to skip it.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn select_bank(&mut self, bank: Bank) -> Result<(), Error<I::Error>> {
        self.device
            .reg_bank_sel()
            .write_async(|w| {
                w.set_bank_sel(bank as u8);
            })
            .await?;
        self.current_bank = bank;
        Ok(())
    }

    /// The last bank selected through this driver
    #[must_use]
    pub fn current_bank(&self) -> Bank {
        self.current_bank
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x6F for a valid IIM-42652
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        self.select_bank(Bank::Bank0).await?;
        let reg = self.device.who_am_i().read_async().await?;
        Ok(reg.who_am_i())
    }

    /// Reset the internal registers and restore the default settings
    ///
    /// Sets the soft reset bit and polls it until the device clears it,
    /// pausing 5 ms between polls, without a timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn reset(&mut self) -> Result<(), Error<I::Error>> {
        self.select_bank(Bank::Bank0).await?;
        self.delay.delay_ms(RESET_SETTLE_MS).await;

        self.device
            .device_config()
            .modify_async(|w| {
                w.set_soft_reset_config(true);
            })
            .await?;
        self.delay.delay_ms(RESET_SETTLE_MS).await;

        // The bit self-clears once the reset has completed
        loop {
            let reg = self.device.device_config().read_async().await?;
            if !reg.soft_reset_config() {
                break;
            }
            self.delay.delay_ms(RESET_SETTLE_MS).await;
        }

        Ok(())
    }

    /// Configure the sensors with the default settings
    ///
    /// Powers the gyroscope and accelerometer into low-noise mode
    /// (`PWR_MGMT0` = 0x0F) and waits out the minimum gyroscope on-time.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn initialize(&mut self) -> Result<(), Error<I::Error>> {
        self.set_power_config(PowerConfig::default()).await?;
        self.delay.delay_ms(GYRO_MIN_ON_TIME_MS).await;
        Ok(())
    }

    /// Write a power configuration to `PWR_MGMT0`
    ///
    /// Does not wait for sensor start-up; see
    /// [`initialize()`](Self::initialize).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_power_config(&mut self, config: PowerConfig) -> Result<(), Error<I::Error>> {
        self.select_bank(Bank::Bank0).await?;
        self.device
            .pwr_mgmt_0()
            .write_async(|w| {
                w.set_accel_mode(config.accel_mode as u8);
                w.set_gyro_mode(config.gyro_mode as u8);
                w.set_idle(config.idle);
                w.set_temp_dis(config.temp_disabled);
            })
            .await?;
        Ok(())
    }

    /// Read accelerometer data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_accel(&mut self) -> Result<AccelData, Error<I::Error>> {
        // Read all 6 bytes atomically to prevent torn reads
        // Register addresses: ACCEL_DATA_X1 (0x1F) through ACCEL_DATA_Z0 (0x24)
        const ACCEL_DATA_X1: u8 = 0x1F;
        let mut buffer = [0u8; 6];
        self.select_bank(Bank::Bank0).await?;
        self.device
            .interface
            .read_register(ACCEL_DATA_X1, 48, &mut buffer)
            .await?;
        self.delay.delay_ms(READ_SETTLE_MS).await;

        let x = i16::from_be_bytes([buffer[0], buffer[1]]);
        let y = i16::from_be_bytes([buffer[2], buffer[3]]);
        let z = i16::from_be_bytes([buffer[4], buffer[5]]);

        Ok(AccelData { x, y, z })
    }

    /// Read gyroscope data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_gyro(&mut self) -> Result<GyroData, Error<I::Error>> {
        // Read all 6 bytes atomically to prevent torn reads
        // Register addresses: GYRO_DATA_X1 (0x25) through GYRO_DATA_Z0 (0x2A)
        const GYRO_DATA_X1: u8 = 0x25;
        let mut buffer = [0u8; 6];
        self.select_bank(Bank::Bank0).await?;
        self.device
            .interface
            .read_register(GYRO_DATA_X1, 48, &mut buffer)
            .await?;
        self.delay.delay_ms(READ_SETTLE_MS).await;

        let x = i16::from_be_bytes([buffer[0], buffer[1]]);
        let y = i16::from_be_bytes([buffer[2], buffer[3]]);
        let z = i16::from_be_bytes([buffer[4], buffer[5]]);

        Ok(GyroData { x, y, z })
    }

    /// Read temperature sensor
    ///
    /// Returns raw 16-bit signed value.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature(&mut self) -> Result<i16, Error<I::Error>> {
        // Read both bytes atomically to prevent torn reads
        // Register addresses: TEMP_DATA1 (0x1D) through TEMP_DATA0 (0x1E)
        const TEMP_DATA1: u8 = 0x1D;
        let mut buffer = [0u8; 2];
        self.select_bank(Bank::Bank0).await?;
        self.device
            .interface
            .read_register(TEMP_DATA1, 16, &mut buffer)
            .await?;
        self.delay.delay_ms(READ_SETTLE_MS).await;

        // Combine high and low bytes (big-endian)
        let temp_raw = i16::from_be_bytes([buffer[0], buffer[1]]);

        Ok(temp_raw)
    }

    /// Read temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.read_temperature().await?;
        Ok(Self::temperature_to_celsius(raw))
    }

    /// Read acceleration in g
    ///
    /// Scaled with the ±16 g power-on full-scale sensitivity (2048 LSB/g).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_acceleration(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = self.read_accel().await?;
        Ok(AccelDataG::from_raw(
            raw.x,
            raw.y,
            raw.z,
            AccelFullScale::default().sensitivity(),
        ))
    }

    /// Read angular velocity in degrees per second
    ///
    /// Scaled with the ±2000 °/s power-on full-scale sensitivity
    /// (16.4 LSB/(°/s)).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_gyro_dps(&mut self) -> Result<GyroDataDps, Error<I::Error>> {
        let raw = self.read_gyro().await?;
        Ok(GyroDataDps::from_raw(
            raw.x,
            raw.y,
            raw.z,
            GyroFullScale::default().sensitivity(),
        ))
    }

    /// Consume the driver and return the interface and delay provider
    pub fn release(self) -> (I, D) {
        (self.device.interface, self.delay)
    }
}
