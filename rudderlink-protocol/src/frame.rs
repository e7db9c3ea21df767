//! Frame encoding and decoding for the rudder link.
//!
//! Frame format:
//! - PAYLOAD: ASCII decimal number, optionally surrounded by whitespace
//! - TERMINATOR (1 byte): `\n`
//!
//! A `\r` before the terminator is tolerated so a terminal emulator can be
//! used to inject frames by hand.

use core::fmt::Write;

use heapless::{String, Vec};

/// Frame terminator byte
pub const FRAME_TERMINATOR: u8 = b'\n';

/// Maximum frame length in bytes, terminator included
///
/// The shortest round-trip representation of any `f64` in `[0, 1]` fits
/// comfortably; anything longer is treated as line noise.
pub const MAX_FRAME_LEN: usize = 32;

/// Errors that can occur during frame decoding or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Line held nothing but whitespace
    Empty,
    /// Line exceeded `MAX_FRAME_LEN` before its terminator
    TooLong,
    /// Payload is not valid UTF-8 or not a number
    Malformed,
    /// Payload parsed, but lies outside `[0, 1]`
    OutOfRange,
    /// Buffer too small for encoding
    BufferTooSmall,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::Empty => f.write_str("empty frame"),
            FrameError::TooLong => f.write_str("frame too long"),
            FrameError::Malformed => f.write_str("malformed frame"),
            FrameError::OutOfRange => f.write_str("value out of range"),
            FrameError::BufferTooSmall => f.write_str("buffer too small"),
        }
    }
}

/// Encode a normalized value as a frame, terminator included
pub fn encode_frame(value: f64) -> Result<String<MAX_FRAME_LEN>, FrameError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(FrameError::OutOfRange);
    }

    let mut frame = String::new();
    writeln!(frame, "{}", value).map_err(|_| FrameError::BufferTooSmall)?;
    Ok(frame)
}

/// Decode one line (with or without its terminator) into a normalized value
pub fn decode_frame(line: &[u8]) -> Result<f64, FrameError> {
    let text = core::str::from_utf8(line).map_err(|_| FrameError::Malformed)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(FrameError::Empty);
    }

    let value: f64 = text.parse().map_err(|_| FrameError::Malformed)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(FrameError::OutOfRange);
    }
    Ok(value)
}

/// Accumulates raw UART bytes into lines
#[derive(Debug, Clone, Default)]
pub struct LineAssembler {
    buffer: Vec<u8, MAX_FRAME_LEN>,
    overflowed: bool,
    /// Dropping the tail of an interrupted line
    skipping: bool,
}

impl LineAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflowed: false,
            skipping: false,
        }
    }

    /// Drop any partially received line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
        self.skipping = false;
    }

    /// Drop the partial line and ignore everything up to the next terminator
    ///
    /// The tail of an interrupted line is never decoded on its own: `1\n`
    /// left over from `0.1\n` would otherwise read as a valid frame.
    pub fn resync(&mut self) {
        self.reset();
        self.skipping = true;
    }

    /// Check if bytes of an unterminated line are pending
    pub fn has_partial(&self) -> bool {
        !self.buffer.is_empty() || self.overflowed || self.skipping
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(None)` while a line is still being received or skipped,
    /// `Ok(Some(value))` when a terminator completes a valid frame, or
    /// `Err` when it completes a bad one. Either way the assembler is ready
    /// for the next line afterwards.
    pub fn feed(&mut self, byte: u8) -> Result<Option<f64>, FrameError> {
        if byte == FRAME_TERMINATOR {
            let result = if self.skipping {
                Ok(None)
            } else if self.overflowed {
                Err(FrameError::TooLong)
            } else {
                decode_frame(&self.buffer).map(Some)
            };
            self.reset();
            return result;
        }

        if self.skipping {
            return Ok(None);
        }

        if !self.overflowed && self.buffer.push(byte).is_err() {
            // Keep swallowing until the terminator so we resync on a line boundary
            self.overflowed = true;
            self.buffer.clear();
        }
        Ok(None)
    }
}
