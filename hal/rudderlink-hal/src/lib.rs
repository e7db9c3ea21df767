//! Rudderlink Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the telemetry link is written
//! against. The core logic never touches chip registers; the RP2040 crate
//! implements these traits on top of embassy-rp, and the host tests
//! implement them with scripted mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  rudderlink-firmware (embassy tasks)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rudderlink-core (normalizer, loops)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rudderlink-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     ▲
//!                     │ implements
//! ┌─────────────────────────────────────────┐
//! │  rudderlink-hal-rp2040 (embassy-rp)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`adc::AnalogInput`] - Potentiometer sampling
//! - [`gpio::InputPin`], [`gpio::OutputPin`] - Digital I/O
//! - [`gpio::DiagnosticIndicator`] - Fire-and-forget activity LED
//! - [`uart::UartTx`] - Outbound serial channel

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput};
pub use gpio::{DiagnosticIndicator, InputPin, OutputPin};
pub use uart::{UartConfig, UartTx};
