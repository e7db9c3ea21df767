//! Local transmitter task
//!
//! Samples the rudder and streams one frame per interval over UART0.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::Timer;

use rudderlink_core::config::TimingConfig;
use rudderlink_core::link::{Transmitter, TxOutcome};
use rudderlink_hal_rp2040::SerialTx;

use crate::channels::SharedRudder;
use crate::tasks::blink::BlinkRequest;

/// Frames between statistics log lines
const STATS_EVERY: u32 = 1000;

#[embassy_executor::task]
pub async fn transmitter_task(
    rudder: &'static SharedRudder,
    mut uart: SerialTx,
    timing: TimingConfig,
) {
    info!("Transmitter task started");

    let mut transmitter = Transmitter::new(timing.blink_ms);
    let mut indicator = BlinkRequest;

    loop {
        // Calibration flag and bounds are read under the same lock; the
        // write happens after it is released
        let sampled = {
            let mut rudder = rudder.lock().await;
            transmitter.sample(&mut *rudder)
        };
        let outcome = match sampled {
            Ok(value) => transmitter.send(value, &mut uart, &mut indicator),
            Err(outcome) => outcome,
        };

        match outcome {
            TxOutcome::Suspended => {
                yield_now().await;
                continue;
            }
            TxOutcome::Sent(value) => {
                trace!("TX: {}", value);
                let stats = transmitter.stats();
                if stats.frames_sent % STATS_EVERY == 0 {
                    debug!("TX stats: {}", stats);
                }
            }
            TxOutcome::SampleFailed(_) | TxOutcome::WriteFailed => {}
        }

        Timer::after_millis(u64::from(timing.tx_interval_ms)).await;
    }
}
