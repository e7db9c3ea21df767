//! Calibration state machine
//!
//! Learns the sensor bounds from a single-button gesture: the operator
//! sweeps the tiller through its full travel, then returns it to center.

pub mod machine;

pub use machine::{Calibration, CalibrationStatus, Gesture, Phase};
