//! Test doubles for the hardware traits

use rudderlink_hal::{AdcError, AnalogInput, DiagnosticIndicator, UartTx};

/// ADC that replays a script, repeating the last value once exhausted
pub struct ScriptedAdc {
    script: Vec<u16>,
    reads: usize,
    fail_after: Option<usize>,
}

impl ScriptedAdc {
    pub fn new(script: &[u16]) -> Self {
        Self {
            script: script.to_vec(),
            reads: 0,
            fail_after: None,
        }
    }

    pub fn constant(value: u16) -> Self {
        Self::new(&[value])
    }

    /// Fail every conversion after the first `n`
    pub fn fail_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn set_script(&mut self, script: &[u16]) {
        self.script = script.to_vec();
        self.reads = 0;
    }

    pub fn heal(&mut self) {
        self.fail_after = None;
    }
}

impl AnalogInput for ScriptedAdc {
    fn read_u16(&mut self) -> Result<u16, AdcError> {
        if self.fail_after.is_some_and(|n| self.reads >= n) {
            return Err(AdcError::Conversion);
        }
        let value = self
            .script
            .get(self.reads)
            .or(self.script.last())
            .copied()
            .unwrap_or(0);
        self.reads += 1;
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFailed;

/// UART that records written bytes and can be told to fail
#[derive(Default)]
pub struct FailingUart {
    pub written: Vec<u8>,
    pub attempts: usize,
    pub failing: bool,
}

impl FailingUart {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

impl UartTx for FailingUart {
    type Error = WriteFailed;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.attempts += 1;
        if self.failing {
            return Err(WriteFailed);
        }
        self.written.extend_from_slice(data);
        Ok(())
    }
}

/// Indicator that remembers every pulse request
#[derive(Default)]
pub struct CountingIndicator {
    pub pulses: Vec<u32>,
}

impl DiagnosticIndicator for CountingIndicator {
    fn pulse(&mut self, duration_ms: u32) {
        self.pulses.push(duration_ms);
    }
}
