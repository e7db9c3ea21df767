//! ADC channel as an analog input
//!
//! RP2040 has a single 12-bit ADC with 4 external channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29

use embassy_rp::adc::{Adc, Blocking, Channel};
use rudderlink_hal::adc::widen_12bit;
use rudderlink_hal::{AdcError, AnalogInput};

/// One ADC channel, read in blocking mode
pub struct PotInput<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> PotInput<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for PotInput<'_> {
    /// Conversion widened from 12 to 16 bits
    fn read_u16(&mut self) -> Result<u16, AdcError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map(widen_12bit)
            .map_err(|_| AdcError::Conversion)
    }
}
