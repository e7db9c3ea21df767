//! Inter-task communication
//!
//! Defines the statics shared between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use rudderlink_core::rudder::LocalRudder;
use rudderlink_hal_rp2040::PotInput;
use rudderlink_protocol::Reading;

/// Local rudder shared by the transmitter and the panel task
///
/// The calibration flag and the bounds live behind the same lock, so the
/// transmitter never sees a half-finished calibration.
pub type SharedRudder = Mutex<CriticalSectionRawMutex, LocalRudder<PotInput<'static>>>;

/// Latest reading from the receiver task
///
/// Overwritten every receiver iteration; the panel keeps the last value it
/// took.
pub static LATEST_READING: Signal<CriticalSectionRawMutex, Reading> = Signal::new();

/// Request to light the diagnostic LED for the given number of milliseconds
pub static BLINK: Signal<CriticalSectionRawMutex, u32> = Signal::new();
