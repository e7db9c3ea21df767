//! Remote receiver: assemble lines, decode, track staleness

use rudderlink_protocol::{FrameError, LineAssembler, Reading};

/// Result of one receiver iteration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxOutcome {
    /// A valid frame arrived
    Updated(f64),
    /// A frame arrived but was rejected; the reading is now invalid
    Rejected(FrameError),
    /// Bytes arrived but no line is complete yet
    Pending,
    /// No complete frame within the read timeout
    Stale,
    /// The UART reported an error
    IoError,
}

impl RxOutcome {
    /// True when the caller should wait the receive interval before the next read
    pub fn is_update(&self) -> bool {
        matches!(self, RxOutcome::Updated(_))
    }
}

/// Receiver counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxStats {
    pub frames: u32,
    pub malformed: u32,
    pub timeouts: u32,
    pub io_errors: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Receiver {
    assembler: LineAssembler,
    reading: Reading,
    stats: RxStats,
}

impl Receiver {
    pub const fn new() -> Self {
        Self {
            assembler: LineAssembler::new(),
            reading: Reading::Invalid,
            stats: RxStats {
                frames: 0,
                malformed: 0,
                timeouts: 0,
                io_errors: 0,
            },
        }
    }

    /// Latest reading
    pub fn reading(&self) -> Reading {
        self.reading
    }

    pub fn stats(&self) -> RxStats {
        self.stats
    }

    /// Feed received bytes
    ///
    /// When several lines complete in one chunk the last one wins. Bytes
    /// after the last terminator stay buffered for the next call.
    pub fn on_bytes(&mut self, bytes: &[u8]) -> RxOutcome {
        let mut outcome = RxOutcome::Pending;
        for &byte in bytes {
            match self.assembler.feed(byte) {
                Ok(None) => {}
                Ok(Some(value)) => outcome = self.accept(value),
                Err(e) => outcome = self.reject(e),
            }
        }
        outcome
    }

    /// No complete frame arrived in time
    ///
    /// A partial line is dropped together with its tail, which may still be
    /// on the wire.
    pub fn on_timeout(&mut self) -> RxOutcome {
        if self.assembler.has_partial() {
            log_debug!("rx: timeout, dropping partial line");
            self.assembler.resync();
        }
        self.reading = Reading::Invalid;
        self.stats.timeouts = self.stats.timeouts.wrapping_add(1);
        RxOutcome::Stale
    }

    /// The UART read failed
    pub fn on_read_error(&mut self) -> RxOutcome {
        log_warn!("rx: UART read error");
        // Bytes may have been lost mid-line
        self.assembler.resync();
        self.reading = Reading::Invalid;
        self.stats.io_errors = self.stats.io_errors.wrapping_add(1);
        RxOutcome::IoError
    }

    fn accept(&mut self, value: f64) -> RxOutcome {
        self.reading = Reading::Valid(value);
        self.stats.frames = self.stats.frames.wrapping_add(1);
        RxOutcome::Updated(value)
    }

    fn reject(&mut self, error: FrameError) -> RxOutcome {
        log_warn!("rx: dropped frame: {}", error);
        self.reading = Reading::Invalid;
        self.stats.malformed = self.stats.malformed.wrapping_add(1);
        RxOutcome::Rejected(error)
    }
}
