//! GPIO wrappers

use embassy_rp::gpio::{Input, Output};
use rudderlink_hal::{InputPin, OutputPin};

/// Active-high push button
pub struct Button<'d>(Input<'d>);

impl<'d> Button<'d> {
    pub fn new(input: Input<'d>) -> Self {
        Self(input)
    }
}

impl InputPin for Button<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

pub struct Led<'d>(Output<'d>);

impl<'d> Led<'d> {
    pub fn new(output: Output<'d>) -> Self {
        Self(output)
    }
}

impl OutputPin for Led<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}
