//! The value carried by the link

/// Latest rudder position as seen by a consumer
///
/// `Invalid` means "no recent valid reading": the link timed out, the last
/// frame was malformed, or nothing has been received yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// No recent valid reading
    #[default]
    Invalid,
    /// Normalized position in `[0, 1]`, 0.5 = center
    Valid(f64),
}

impl Reading {
    /// The normalized value, if valid
    pub fn value(&self) -> Option<f64> {
        match *self {
            Reading::Valid(v) => Some(v),
            Reading::Invalid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(Reading::default(), Reading::Invalid);
        assert_eq!(Reading::default().value(), None);
    }

    #[test]
    fn test_valid_carries_value() {
        assert_eq!(Reading::Valid(0.3).value(), Some(0.3));
    }
}
