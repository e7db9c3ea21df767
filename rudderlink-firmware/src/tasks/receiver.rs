//! Remote receiver task
//!
//! Reads frames from UART0 and publishes the latest reading for the panel.
//! No frame starting within the read timeout makes the reading stale.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{with_timeout, Duration, Timer};
use embedded_io_async::Read;

use rudderlink_core::config::LinkConfig;
use rudderlink_core::link::{Receiver, RxOutcome};

use crate::channels::LATEST_READING;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

#[embassy_executor::task]
pub async fn receiver_task(mut rx: BufferedUartRx, config: LinkConfig) {
    info!("Receiver task started");

    let mut receiver = Receiver::new();
    let mut buf = [0u8; RX_BUF_SIZE];
    let first_byte = Duration::from_millis(u64::from(config.serial.read_timeout_ms));
    let line_budget = Duration::from_millis(u64::from(config.line_budget_ms()));

    loop {
        // The read timeout bounds the wait for a frame to start; once bytes
        // flow, the rest of the line gets the line budget
        let outcome = match with_timeout(first_byte, rx.read(&mut buf)).await {
            Err(_) => receiver.on_timeout(),
            Ok(Err(e)) => {
                warn!("UART read error: {:?}", e);
                receiver.on_read_error()
            }
            Ok(Ok(n)) => match receiver.on_bytes(&buf[..n]) {
                RxOutcome::Pending => {
                    match with_timeout(line_budget, read_frame(&mut rx, &mut receiver, &mut buf)).await {
                        Ok(outcome) => outcome,
                        Err(_) => receiver.on_timeout(),
                    }
                }
                outcome => outcome,
            },
        };

        LATEST_READING.signal(receiver.reading());

        if outcome.is_update() {
            Timer::after_millis(u64::from(config.timing.rx_interval_ms)).await;
        } else {
            yield_now().await;
        }
    }
}

/// Read until the receiver completes a line or the UART fails
async fn read_frame(rx: &mut BufferedUartRx, receiver: &mut Receiver, buf: &mut [u8]) -> RxOutcome {
    loop {
        match rx.read(buf).await {
            Ok(n) if n > 0 => {
                let outcome = receiver.on_bytes(&buf[..n]);
                if outcome != RxOutcome::Pending {
                    return outcome;
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
                return receiver.on_read_error();
            }
        }
    }
}
