//! Averaging filter

use rudderlink_hal::{AdcError, AnalogInput};

/// Mean of `count` consecutive conversions, truncated
///
/// A count of zero is treated as one. Any failed conversion aborts the
/// whole sample.
pub fn read_averaged<A: AnalogInput + ?Sized>(adc: &mut A, count: u16) -> Result<u16, AdcError> {
    let count = u32::from(count.max(1));
    let mut sum: u32 = 0;
    for _ in 0..count {
        sum += u32::from(adc.read_u16()?);
    }
    Ok((sum / count) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedAdc;

    #[test]
    fn test_mean_truncates() {
        let mut adc = ScriptedAdc::new(&[1, 2, 2]);
        assert_eq!(read_averaged(&mut adc, 3), Ok(1));
    }

    #[test]
    fn test_full_scale_does_not_overflow() {
        let mut adc = ScriptedAdc::constant(u16::MAX);
        assert_eq!(read_averaged(&mut adc, 1000), Ok(u16::MAX));
    }

    #[test]
    fn test_zero_count_reads_once() {
        let mut adc = ScriptedAdc::new(&[42]);
        assert_eq!(read_averaged(&mut adc, 0), Ok(42));
        assert_eq!(adc.reads(), 1);
    }

    #[test]
    fn test_error_aborts() {
        let mut adc = ScriptedAdc::new(&[10, 10]).fail_after(1);
        assert_eq!(read_averaged(&mut adc, 100), Err(AdcError::Conversion));
    }
}
