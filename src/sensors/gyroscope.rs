//! Gyroscope sensor types and conversion helpers
//!
//! Provides types, enums, and utility functions for the IIM-42652's 3-axis
//! gyroscope.

/// Gyroscope full-scale range
///
/// Register encodings for `GYRO_CONFIG0.gyro_fs_sel`. The power-on default is
/// ±2000 °/s, which is what the driver's scaled readings assume; the
/// configuration register is documented but not written by any accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// ±2000°/s range (power-on default)
    Dps2000 = 0,
    /// ±1000°/s range
    Dps1000 = 1,
    /// ±500°/s range
    Dps500 = 2,
    /// ±250°/s range
    Dps250 = 3,
    /// ±125°/s range
    Dps125 = 4,
    /// ±62.5°/s range
    Dps62_5 = 5,
    /// ±31.25°/s range
    Dps31_25 = 6,
    /// ±15.625°/s range
    Dps15_625 = 7,
}

impl GyroFullScale {
    /// Get the sensitivity in LSB/(°/s)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::Dps2000 => 16.4,     // LSB/(°/s)
            Self::Dps1000 => 32.8,     // LSB/(°/s)
            Self::Dps500 => 65.5,      // LSB/(°/s)
            Self::Dps250 => 131.0,     // LSB/(°/s)
            Self::Dps125 => 262.0,     // LSB/(°/s)
            Self::Dps62_5 => 524.3,    // LSB/(°/s)
            Self::Dps31_25 => 1048.6,  // LSB/(°/s)
            Self::Dps15_625 => 2097.2, // LSB/(°/s)
        }
    }

    /// Get the maximum value in °/s
    #[must_use]
    pub const fn max_value(self) -> f32 {
        match self {
            Self::Dps2000 => 2000.0,
            Self::Dps1000 => 1000.0,
            Self::Dps500 => 500.0,
            Self::Dps250 => 250.0,
            Self::Dps125 => 125.0,
            Self::Dps62_5 => 62.5,
            Self::Dps31_25 => 31.25,
            Self::Dps15_625 => 15.625,
        }
    }
}

impl Default for GyroFullScale {
    fn default() -> Self {
        Self::Dps2000
    }
}

/// Gyroscope data in physical units (degrees per second)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataDps {
    /// X-axis angular velocity in °/s
    pub x: f32,
    /// Y-axis angular velocity in °/s
    pub y: f32,
    /// Z-axis angular velocity in °/s
    pub z: f32,
}

impl GyroDataDps {
    /// Create from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `sensitivity` - Sensitivity in LSB/(°/s) (from `GyroFullScale::sensitivity()`)
    #[must_use]
    pub fn from_raw(raw_x: i16, raw_y: i16, raw_z: i16, sensitivity: f32) -> Self {
        Self {
            x: f32::from(raw_x) / sensitivity,
            y: f32::from(raw_y) / sensitivity,
            z: f32::from(raw_z) / sensitivity,
        }
    }

    /// Get the magnitude of the rotation vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
