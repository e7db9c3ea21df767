//! Drawing surface trait
//!
//! Coordinates are in pixels from the top-left corner, y growing downward.
//! Drawing is clipped by the implementation; only `flush` talks to the
//! hardware.

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Text did not fit the formatting buffer
    BufferOverflow,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("display communication error"),
            DisplayError::BufferOverflow => f.write_str("display text buffer overflow"),
        }
    }
}

/// Monochrome pixel surface
pub trait Surface {
    /// Clear the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Rectangle outline, top-left at `(x, y)`
    fn rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError>;

    /// Filled rectangle, top-left at `(x, y)`
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError>;

    /// Horizontal line of `length` pixels starting at `(x, y)`
    fn hline(&mut self, x: i32, y: i32, length: u32) -> Result<(), DisplayError>;

    /// Vertical line of `length` pixels starting at `(x, y)`
    fn vline(&mut self, x: i32, y: i32, length: u32) -> Result<(), DisplayError>;

    /// Line between two points, both included
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), DisplayError>;

    /// Text with its top-left corner at `(x, y)`
    fn text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError>;

    /// Send the frame buffer to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Advance width of one character in pixels
    fn char_width(&self) -> u32;

    /// Surface width in pixels
    fn width(&self) -> u32;
}
