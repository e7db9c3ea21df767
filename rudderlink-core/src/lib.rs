//! Board-agnostic core logic for the rudder telemetry link
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Signal conditioning (averaging, bounds, deadband, scaling)
//! - Calibration state machine
//! - Local rudder (sensor + calibrated bounds)
//! - Transmitter and receiver step logic
//! - Configuration types and the `link.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
pub mod log;

pub mod calibration;
pub mod config;
pub mod link;
pub mod rudder;
pub mod signal;

#[cfg(test)]
pub(crate) mod mock;
