//! Drawing surface and screen layouts for the Rudderlink OLED
//!
//! This crate provides:
//! - `Surface` trait for monochrome pixel displays
//! - Widgets: level indicator, rudder vector, centered text
//! - `RemoteView` and `CalibrationView` screen layouts
//!
//! # Architecture
//!
//! The firmware implements `Surface` for its SSD1306 driver; the layouts
//! only talk to the trait, so they are tested on the host against a
//! recording surface.

#![cfg_attr(not(test), no_std)]

pub mod surface;
pub mod views;
pub mod widgets;

#[cfg(test)]
pub(crate) mod recording;

// Re-export key types
pub use surface::{DisplayError, Surface};
pub use views::{CalibrationView, RemoteView};
pub use widgets::{centered_text_x, draw_vector, level_indicator, vector_endpoint, Indication, Orientation};
