//! Analog input abstractions
//!
//! Samples are always exposed in the full unsigned 16-bit domain
//! (0..=65535), whatever the converter's native resolution.

/// Errors reported by an analog input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// The conversion did not complete
    Conversion,
}

impl core::fmt::Display for AdcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AdcError::Conversion => f.write_str("ADC conversion failed"),
        }
    }
}

/// Single analog input channel
pub trait AnalogInput {
    /// Take one raw reading, scaled to 0..=65535
    fn read_u16(&mut self) -> Result<u16, AdcError>;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn read_u16(&mut self) -> Result<u16, AdcError> {
        (**self).read_u16()
    }
}

/// Widen a 12-bit conversion result to the 16-bit domain
///
/// The top bits are replicated into the low nibble so that 0 maps to 0 and
/// 4095 maps to 65535.
pub const fn widen_12bit(raw: u16) -> u16 {
    let raw = raw & 0x0FFF;
    (raw << 4) | (raw >> 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_endpoints() {
        assert_eq!(widen_12bit(0), 0);
        assert_eq!(widen_12bit(4095), 65535);
    }

    #[test]
    fn test_widen_midscale() {
        // 0x800 -> 0x8008
        assert_eq!(widen_12bit(0x800), 0x8008);
    }

    #[test]
    fn test_widen_masks_high_bits() {
        assert_eq!(widen_12bit(0xF000), 0);
    }
}
