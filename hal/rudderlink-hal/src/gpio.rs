//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input pin
///
/// Level-sensed: callers poll the current level, there are no edge
/// interrupts behind this trait.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

/// Activity indicator (typically the on-board LED)
///
/// `pulse` must return immediately; the implementation is responsible for
/// turning the indicator off again after `duration_ms`.
pub trait DiagnosticIndicator {
    /// Light the indicator for `duration_ms` milliseconds
    fn pulse(&mut self, duration_ms: u32);
}

/// Indicator that does nothing
///
/// Used when no LED is wired, and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIndicator;

impl DiagnosticIndicator for NoIndicator {
    fn pulse(&mut self, _duration_ms: u32) {}
}
