#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod power;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use device::{AccelData, GyroData, Iim42652Driver};
pub use interface::{I2cInterface, SpiInterface};
pub use power::{AccelMode, GyroMode, PowerConfig};
pub use sensors::{AccelDataG, AccelFullScale, GyroDataDps, GyroFullScale};

/// IIM-42652 I2C address when AP_AD0 pin is low (default: 0x68)
///
/// This is the most common configuration. The AP_AD0 pin is typically pulled
/// low or left floating. Use [`I2cInterface::default()`] for this
/// configuration.
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// IIM-42652 I2C address when AP_AD0 pin is high (alternative: 0x69)
///
/// Use this address when the AP_AD0 pin is explicitly pulled high to VDDIO.
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Expected value of `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x6F;

/// Register bank identifiers
///
/// The IIM-42652 pages its register file: an address in 0x00-0x7F resolves
/// to a different register depending on the bank selected via `REG_BANK_SEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    /// Bank 0 - Primary configuration and sensor data registers
    Bank0 = 0,
    /// Bank 1 - Gyroscope static configuration and self-test data
    Bank1 = 1,
    /// Bank 2 - Accelerometer static configuration and self-test data
    Bank2 = 2,
    /// Bank 3 - Pad pull-up/pull-down configuration
    Bank3 = 3,
    /// Bank 4 - FDR, APEX, interrupt routing and user offset registers
    Bank4 = 4,
}

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
