//! Screen layouts
//!
//! Each view clears the surface, draws a full frame and flushes it.

use core::fmt::Write;

use heapless::String;
use rudderlink_protocol::Reading;

use crate::surface::{DisplayError, Surface};
use crate::widgets::{centered_text_x, draw_vector, level_indicator, Indication, Orientation};

/// Text shown in place of the angle when there is no valid reading
pub const NO_DATA_TEXT: &str = "Null";

const ANGLE_ROW: i32 = 6;
const INDICATOR_X: i32 = 32;
const INDICATOR_Y: i32 = 16;
const INDICATOR_LENGTH: u32 = 64;
const INDICATOR_WIDTH: u32 = 8;
const VECTOR_ORIGIN: (i32, i32) = (64, 32);
const VECTOR_LENGTH: u32 = 32;

/// Remote screen: numeric angle, level indicator, rudder vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemoteView {
    /// Latest received reading
    pub reading: Reading,
    /// Physical angle for `reading`, `None` when invalid
    pub angle_deg: Option<f64>,
}

impl RemoteView {
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), DisplayError> {
        surface.clear()?;

        let mut text: String<16> = String::new();
        match self.angle_deg {
            Some(angle) => write!(text, "{:.1}", angle).map_err(|_| DisplayError::BufferOverflow)?,
            None => text.push_str(NO_DATA_TEXT).map_err(|_| DisplayError::BufferOverflow)?,
        }
        let x = centered_text_x(&text, surface.char_width(), surface.width());
        surface.text(&text, x, ANGLE_ROW)?;

        match self.reading.value() {
            Some(perc) => level_indicator(
                surface,
                perc,
                INDICATOR_X,
                INDICATOR_Y,
                INDICATOR_LENGTH,
                INDICATOR_WIDTH,
                Indication::Line,
                Orientation::Horizontal,
            )?,
            // Empty outline when there is nothing to show
            None => surface.rect(INDICATOR_X, INDICATOR_Y, INDICATOR_LENGTH, INDICATOR_WIDTH)?,
        }

        if let (Reading::Valid(_), Some(angle)) = (self.reading, self.angle_deg) {
            // 0 degrees points straight down
            let (x, y) = VECTOR_ORIGIN;
            draw_vector(surface, x, y, VECTOR_LENGTH, angle - 90.0)?;
        }

        surface.flush()
    }
}

/// Calibration screen: live value and the bounds learned so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationView {
    pub current: u16,
    pub min: u16,
    pub max: u16,
}

impl CalibrationView {
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), DisplayError> {
        surface.clear()?;
        let rows = [("Val", self.current, 0), ("Min", self.min, 8), ("Max", self.max, 16)];
        for (label, value, y) in rows {
            let mut text: String<16> = String::new();
            write!(text, "{}: {}", label, value).map_err(|_| DisplayError::BufferOverflow)?;
            surface.text(&text, 0, y)?;
        }
        surface.flush()
    }
}
