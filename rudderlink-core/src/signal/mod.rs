//! Analog signal conditioning
//!
//! Turns raw potentiometer samples into a normalized rudder position:
//! - Averaging filter over N consecutive conversions
//! - Calibrated bounds with a symmetric center deadband
//! - Affine scaling of the normalized value onto physical units

pub mod bounds;
pub mod normalize;
pub mod sampling;
pub mod scale;

pub use bounds::{Bounds, Deadband, SENTINEL_CENTER};
pub use normalize::{norm, normalize};
pub use sampling::read_averaged;
pub use scale::{scale, OutputKind, ScaleError};

use rudderlink_hal::AdcError;

/// Errors from producing a conditioned value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalError {
    /// The averaged sample could not be taken
    Adc(AdcError),
    /// A normalized value was outside `[0, 1]`
    Scale(ScaleError),
}

impl From<AdcError> for SignalError {
    fn from(e: AdcError) -> Self {
        SignalError::Adc(e)
    }
}

impl From<ScaleError> for SignalError {
    fn from(e: ScaleError) -> Self {
        SignalError::Scale(e)
    }
}

impl core::fmt::Display for SignalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SignalError::Adc(e) => write!(f, "sample failed: {}", e),
            SignalError::Scale(e) => write!(f, "scale failed: {}", e),
        }
    }
}
