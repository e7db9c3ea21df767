//! Configuration type definitions

use rudderlink_hal::UartConfig;
use rudderlink_protocol::MAX_FRAME_LEN;

use crate::calibration::Gesture;
use crate::rudder::Travel;
use crate::signal::{Bounds, Deadband, SENTINEL_CENTER};

/// Configuration errors
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Malformed or unknown `[section]` header
    InvalidSection { line: u32 },
    /// Line is neither a header, a comment, nor `key = value`
    InvalidLine { line: u32 },
    /// Value could not be parsed for its key
    InvalidValue { line: u32 },
    /// Travel angle not a positive finite number
    InvalidTravel,
    /// Deadband negative or at least half the travel
    InvalidDeadband,
    /// Sensor bounds violate `min <= center <= max` or `min == max`
    InvalidBounds,
    /// A sample count of zero
    ZeroSamples,
    /// A baudrate of zero
    InvalidBaudrate,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidSection { line } => write!(f, "line {}: invalid section", line),
            ConfigError::InvalidLine { line } => write!(f, "line {}: expected key = value", line),
            ConfigError::InvalidValue { line } => write!(f, "line {}: invalid value", line),
            ConfigError::InvalidTravel => f.write_str("travel must be positive"),
            ConfigError::InvalidDeadband => f.write_str("deadband must be below half the travel"),
            ConfigError::InvalidBounds => f.write_str("sensor bounds must satisfy min <= center <= max"),
            ConfigError::ZeroSamples => f.write_str("sample counts must be non-zero"),
            ConfigError::InvalidBaudrate => f.write_str("baudrate must be non-zero"),
        }
    }
}

/// `[rudder]` section
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RudderConfig {
    /// Full steering travel in degrees
    pub travel_deg: f64,
    /// Half-width of the center deadband in degrees
    pub deadband_deg: f64,
    /// Calibration button gesture
    pub gesture: Gesture,
}

impl Default for RudderConfig {
    fn default() -> Self {
        Self {
            travel_deg: 120.0,
            deadband_deg: 1.0,
            gesture: Gesture::HoldToSweep,
        }
    }
}

/// `[sensor]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Power-on bounds, used until a calibration runs
    pub min: u16,
    pub max: u16,
    pub center: u16,
    /// Conversions averaged per live sample
    pub live_samples: u16,
    /// Conversions averaged for the calibration center
    pub precise_samples: u16,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            min: 288,
            max: 65435,
            center: SENTINEL_CENTER,
            live_samples: 100,
            precise_samples: 1000,
        }
    }
}

/// `[serial]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    pub baudrate: u32,
    /// Wait for the first byte of a frame before the reading goes stale
    pub read_timeout_ms: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: 19200,
            read_timeout_ms: 10,
        }
    }
}

/// `[timing]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    pub tx_interval_ms: u32,
    pub rx_interval_ms: u32,
    /// Diagnostic LED pulse per transmitted frame
    pub blink_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tx_interval_ms: 10,
            rx_interval_ms: 10,
            blink_ms: 5,
        }
    }
}

/// Complete link configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    pub rudder: RudderConfig,
    pub sensor: SensorConfig,
    pub serial: SerialConfig,
    pub timing: TimingConfig,
}

impl LinkConfig {
    /// Check cross-field consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let travel = self.rudder.travel_deg;
        if !travel.is_finite() || travel <= 0.0 {
            return Err(ConfigError::InvalidTravel);
        }
        self.deadband()?;

        let s = &self.sensor;
        if s.min >= s.max || !self.bounds().is_ordered() {
            return Err(ConfigError::InvalidBounds);
        }
        if s.live_samples == 0 || s.precise_samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.serial.baudrate == 0 {
            return Err(ConfigError::InvalidBaudrate);
        }
        Ok(())
    }

    pub fn deadband(&self) -> Result<Deadband, ConfigError> {
        Deadband::from_degrees(self.rudder.deadband_deg, self.rudder.travel_deg)
    }

    /// Power-on bounds
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.sensor.min, self.sensor.max, self.sensor.center)
    }

    pub fn travel(&self) -> Travel {
        Travel::new(self.rudder.travel_deg)
    }

    pub fn uart(&self) -> UartConfig {
        UartConfig::with_baudrate(self.serial.baudrate)
    }

    /// Time allowed for the rest of a line once its first byte has arrived
    ///
    /// Covers a `MAX_FRAME_LEN` line on the wire plus the read timeout as
    /// slack, so a slow but intact frame is never cut short.
    pub fn line_budget_ms(&self) -> u32 {
        let line_us = self.uart().byte_time_us().saturating_mul(MAX_FRAME_LEN as u32);
        line_us.div_ceil(1000).saturating_add(self.serial.read_timeout_ms)
    }
}
