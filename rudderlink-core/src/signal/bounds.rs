//! Calibration bounds and deadband

use crate::config::ConfigError;

/// Center value the bounds are reset to when a calibration starts
pub const SENTINEL_CENTER: u16 = 32500;

/// Full scale of the raw sample domain
const RAW_FULL_SCALE: f64 = 65535.0;

/// Calibrated usable range of the sensor, in raw ADC units
///
/// Once a calibration completes `min <= center <= max`. While one is in
/// progress the pair may be inverted (`min > max`), which marks "no sample
/// taken yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub min: u16,
    pub max: u16,
    pub center: u16,
}

impl Bounds {
    pub const fn new(min: u16, max: u16, center: u16) -> Self {
        Self { min, max, center }
    }

    /// Starting point of a calibration sweep
    pub const fn sentinel() -> Self {
        Self {
            min: SENTINEL_CENTER + 1,
            max: SENTINEL_CENTER - 1,
            center: SENTINEL_CENTER,
        }
    }

    /// True while no sample has been folded in since the sentinel reset
    pub const fn is_unset(&self) -> bool {
        self.min > self.max
    }

    /// Check the `min <= center <= max` invariant
    pub const fn is_ordered(&self) -> bool {
        self.min <= self.center && self.center <= self.max
    }

    /// Widen min/max so they include `sample`
    ///
    /// The first sample after a sentinel reset replaces both ends.
    pub fn include(&mut self, sample: u16) {
        if self.is_unset() {
            self.min = sample;
            self.max = sample;
            return;
        }
        if sample < self.min {
            self.min = sample;
        }
        if sample > self.max {
            self.max = sample;
        }
    }

    /// Set the center and keep the invariant
    pub fn set_center(&mut self, center: u16) {
        self.center = center;
        self.include(center);
    }
}

impl Default for Bounds {
    /// Factory bounds for a typical 10k linear pot on the Pico ADC
    fn default() -> Self {
        Self::new(288, 65435, SENTINEL_CENTER)
    }
}

/// Half-width of the center deadband in raw units
///
/// Fixed at construction; nothing recomputes it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadband(u16);

impl Deadband {
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// `deadband_deg / travel_deg * 65535`, truncated
    pub fn from_degrees(deadband_deg: f64, travel_deg: f64) -> Result<Self, ConfigError> {
        if !(travel_deg > 0.0) || !(deadband_deg >= 0.0) || deadband_deg * 2.0 >= travel_deg {
            return Err(ConfigError::InvalidDeadband);
        }
        let raw = deadband_deg / travel_deg * RAW_FULL_SCALE;
        Ok(Self(raw as u16))
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}
