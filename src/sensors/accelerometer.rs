//! Accelerometer sensor types and conversion helpers
//!
//! Provides types, enums, and utility functions for the IIM-42652's 3-axis
//! accelerometer.

/// Accelerometer full-scale range
///
/// Register encodings for `ACCEL_CONFIG0.accel_fs_sel`. The power-on default
/// is ±16 g, which is what the driver's scaled readings assume; the
/// configuration register is documented but not written by any accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±16g range (least sensitive, most range; power-on default)
    G16 = 0,
    /// ±8g range
    G8 = 1,
    /// ±4g range
    G4 = 2,
    /// ±2g range (most sensitive, least range)
    G2 = 3,
}

impl AccelFullScale {
    /// Get the sensitivity in LSB/g (Least Significant Bit per g)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::G16 => 2048.0,  // LSB/g
            Self::G8 => 4096.0,   // LSB/g
            Self::G4 => 8192.0,   // LSB/g
            Self::G2 => 16384.0,  // LSB/g
        }
    }

    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G16 => 16,
            Self::G8 => 8,
            Self::G4 => 4,
            Self::G2 => 2,
        }
    }
}

impl Default for AccelFullScale {
    fn default() -> Self {
        Self::G16
    }
}

/// Accelerometer data in physical units (g-force)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataG {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl AccelDataG {
    /// Create from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `sensitivity` - Sensitivity in LSB/g (from `AccelFullScale::sensitivity()`)
    #[must_use]
    pub fn from_raw(raw_x: i16, raw_y: i16, raw_z: i16, sensitivity: f32) -> Self {
        Self {
            x: f32::from(raw_x) / sensitivity,
            y: f32::from(raw_y) / sensitivity,
            z: f32::from(raw_z) / sensitivity,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the acceleration vector (make magnitude = 1.0)
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            }
        } else {
            *self
        }
    }
}
