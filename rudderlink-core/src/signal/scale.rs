//! Normalized value to physical units

/// Rounding applied to a scaled value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputKind {
    /// Truncated toward zero
    Integer,
    /// Unrounded
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScaleError {
    /// Input was outside `[0, 1]` or NaN
    OutOfRange,
}

impl core::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScaleError::OutOfRange => f.write_str("normalized value out of range"),
        }
    }
}

/// Affine map of `normalized` from `[0, 1]` onto `[out_min, out_max]`
pub fn scale(normalized: f64, out_min: f64, out_max: f64, kind: OutputKind) -> Result<f64, ScaleError> {
    if !(0.0..=1.0).contains(&normalized) {
        log_warn!("scale: normalized value {} outside [0, 1]", normalized);
        return Err(ScaleError::OutOfRange);
    }

    let value = out_min + normalized * (out_max - out_min);
    Ok(match kind {
        OutputKind::Integer => libm::trunc(value),
        OutputKind::Float => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_zero_degrees() {
        assert_eq!(scale(0.5, -60.0, 60.0, OutputKind::Integer), Ok(0.0));
        assert_eq!(scale(0.5, -60.0, 60.0, OutputKind::Float), Ok(0.0));
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(scale(0.0, -60.0, 60.0, OutputKind::Float), Ok(-60.0));
        assert_eq!(scale(1.0, -60.0, 60.0, OutputKind::Float), Ok(60.0));
    }

    #[test]
    fn test_integer_truncates_toward_zero() {
        // 0.26 -> -28.8, 0.74 -> 28.8
        assert_eq!(scale(0.26, -60.0, 60.0, OutputKind::Integer), Ok(-28.0));
        assert_eq!(scale(0.74, -60.0, 60.0, OutputKind::Integer), Ok(28.0));
    }

    #[test]
    fn test_out_of_range_is_error() {
        assert_eq!(scale(1.01, -60.0, 60.0, OutputKind::Float), Err(ScaleError::OutOfRange));
        assert_eq!(scale(-0.5, -60.0, 60.0, OutputKind::Float), Err(ScaleError::OutOfRange));
        assert_eq!(scale(f64::NAN, -60.0, 60.0, OutputKind::Float), Err(ScaleError::OutOfRange));
    }

    #[test]
    fn test_explicit_fallback() {
        let angle = scale(2.0, -60.0, 60.0, OutputKind::Float).unwrap_or(0.0);
        assert_eq!(angle, 0.0);
    }
}
