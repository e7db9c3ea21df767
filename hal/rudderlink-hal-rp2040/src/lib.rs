//! RP2040-specific HAL for the Rudderlink firmware
//!
//! Wraps embassy-rp drivers so they implement the shared `rudderlink-hal`
//! traits:
//!
//! - `PotInput`: blocking ADC channel as `AnalogInput`
//! - `Button` / `Led`: GPIO as `InputPin` / `OutputPin`
//! - `SerialTx`: buffered UART transmitter as `UartTx`

#![no_std]

pub mod adc;
pub mod gpio;
pub mod uart;

pub use adc::PotInput;
pub use gpio::{Button, Led};
pub use uart::{uart_config, SerialTx};
