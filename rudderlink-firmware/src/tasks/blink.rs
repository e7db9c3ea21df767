//! Diagnostic LED task
//!
//! The transmitter requests a pulse after every frame; this task turns the
//! request into an LED flash so the sender never waits on it.

use defmt::*;
use embassy_time::Timer;

use rudderlink_hal::{DiagnosticIndicator, OutputPin};
use rudderlink_hal_rp2040::Led;

use crate::channels::BLINK;

/// Fire-and-forget indicator backed by the `BLINK` signal
pub struct BlinkRequest;

impl DiagnosticIndicator for BlinkRequest {
    fn pulse(&mut self, duration_ms: u32) {
        BLINK.signal(duration_ms);
    }
}

#[embassy_executor::task]
pub async fn blink_task(mut led: Led<'static>) {
    info!("Blink task started");

    loop {
        let duration_ms = BLINK.wait().await;
        led.set_high();
        Timer::after_millis(u64::from(duration_ms)).await;
        led.set_low();
    }
}
