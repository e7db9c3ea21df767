//! Local transmitter: sample, frame, send, blink

use rudderlink_hal::{AdcError, AnalogInput, DiagnosticIndicator, UartTx};
use rudderlink_protocol::encode_frame;

use crate::rudder::LocalRudder;

/// Result of one transmitter iteration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxOutcome {
    /// A calibration session is running; nothing was sampled or sent
    Suspended,
    /// Frame written for this normalized value
    Sent(f64),
    /// The averaged sample failed
    SampleFailed(AdcError),
    /// The UART rejected the frame
    WriteFailed,
}

/// Transmitter counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxStats {
    pub frames_sent: u32,
    pub sample_failures: u32,
    pub write_failures: u32,
}

#[derive(Debug, Clone)]
pub struct Transmitter {
    blink_ms: u32,
    stats: TxStats,
}

impl Transmitter {
    pub const fn new(blink_ms: u32) -> Self {
        Self {
            blink_ms,
            stats: TxStats {
                frames_sent: 0,
                sample_failures: 0,
                write_failures: 0,
            },
        }
    }

    pub fn stats(&self) -> TxStats {
        self.stats
    }

    /// Sample the rudder for this iteration
    ///
    /// Needs the rudder only; callers sharing it can release it before
    /// `send`. `Err` carries the outcome of an iteration that ends here.
    pub fn sample<A: AnalogInput>(&mut self, rudder: &mut LocalRudder<A>) -> Result<f64, TxOutcome> {
        match rudder.poll_normalized() {
            None => Err(TxOutcome::Suspended),
            Some(Ok(value)) => Ok(value),
            Some(Err(e)) => {
                self.stats.sample_failures = self.stats.sample_failures.wrapping_add(1);
                log_warn!("tx: sample failed: {}", e);
                Err(TxOutcome::SampleFailed(e))
            }
        }
    }

    /// Frame and write a sampled value, then pulse the indicator
    ///
    /// Failures are logged and counted; the caller just keeps stepping.
    pub fn send<U, I>(&mut self, value: f64, uart: &mut U, indicator: &mut I) -> TxOutcome
    where
        U: UartTx,
        I: DiagnosticIndicator,
    {
        // normalize() only yields [0, 1], which always fits a frame
        let Ok(frame) = encode_frame(value) else {
            return TxOutcome::WriteFailed;
        };

        if uart.write_blocking(frame.as_bytes()).is_err() {
            self.stats.write_failures = self.stats.write_failures.wrapping_add(1);
            log_warn!("tx: UART write failed");
            return TxOutcome::WriteFailed;
        }

        indicator.pulse(self.blink_ms);
        self.stats.frames_sent = self.stats.frames_sent.wrapping_add(1);
        TxOutcome::Sent(value)
    }
}
