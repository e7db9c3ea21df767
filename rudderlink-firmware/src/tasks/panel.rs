//! Panel task: OLED rendering and the calibration button

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;

use rudderlink_core::calibration::{Calibration, CalibrationStatus, Gesture};
use rudderlink_core::rudder::Travel;
use rudderlink_display::{CalibrationView, RemoteView};
use rudderlink_hal::InputPin;
use rudderlink_hal_rp2040::Button;
use rudderlink_protocol::Reading;

use crate::channels::{SharedRudder, LATEST_READING};
use crate::ssd1306::Ssd1306;

pub type Display = Ssd1306<I2c<'static, I2C1, Blocking>>;

#[embassy_executor::task]
pub async fn panel_task(
    rudder: &'static SharedRudder,
    button: Button<'static>,
    mut display: Display,
    gesture: Gesture,
    travel: Travel,
) {
    info!("Panel task started");

    let mut calibration = Calibration::new(gesture);
    let mut reading = Reading::Invalid;

    loop {
        if button.is_high() {
            calibrate(rudder, &button, &mut display, &mut calibration).await;
        }

        if let Some(latest) = LATEST_READING.try_take() {
            reading = latest;
        }

        let view = RemoteView {
            reading,
            angle_deg: travel.remote_angle(reading),
        };
        if let Err(e) = view.render(&mut display) {
            warn!("Display error: {}", e);
        }

        yield_now().await;
    }
}

/// Run one calibration session to completion
async fn calibrate(
    rudder: &'static SharedRudder,
    button: &Button<'static>,
    display: &mut Display,
    calibration: &mut Calibration,
) {
    calibration.begin(&mut *rudder.lock().await);

    loop {
        let status = {
            let mut rudder = rudder.lock().await;
            calibration.poll(&mut *rudder, button.is_high())
        };

        match status {
            CalibrationStatus::Live { current, bounds } => {
                let view = CalibrationView {
                    current,
                    min: bounds.min,
                    max: bounds.max,
                };
                if let Err(e) = view.render(display) {
                    warn!("Display error: {}", e);
                }
            }
            CalibrationStatus::Complete(bounds) => {
                info!(
                    "Calibrated: min={} center={} max={}",
                    bounds.min, bounds.center, bounds.max
                );
                return;
            }
            CalibrationStatus::Idle => return,
            CalibrationStatus::Waiting(_) | CalibrationStatus::SampleFailed(_) => {}
        }

        yield_now().await;
    }
}
