//! Calibration phases and transitions

use rudderlink_hal::{AdcError, AnalogInput};

use crate::rudder::LocalRudder;
use crate::signal::Bounds;

/// Calibration phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// No session
    #[default]
    Idle,
    /// Session started, waiting for the button to reach the sweep level
    WaitForPress,
    /// Tracking min/max while the button stays at the sweep level
    Sampling,
    /// Center committed, waiting for the button to be released
    WaitForRelease,
}

/// Button gesture that drives the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Hold the button while sweeping, release at center
    #[default]
    HoldToSweep,
    /// Press to arm, release and sweep, press again at center, release
    PressToggle,
}

impl Gesture {
    /// Button level (true = pressed) during which the sweep is sampled
    pub const fn sweep_level(self) -> bool {
        match self {
            Gesture::HoldToSweep => true,
            Gesture::PressToggle => false,
        }
    }
}

/// What one poll produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationStatus {
    /// No session running
    Idle,
    /// Waiting on the button in the given phase
    Waiting(Phase),
    /// Live sweep snapshot
    Live { current: u16, bounds: Bounds },
    /// A sample failed; the same phase is retried on the next poll
    SampleFailed(AdcError),
    /// Session finished with these bounds
    Complete(Bounds),
}

/// Calibration session driver
///
/// Call [`Calibration::begin`] to start a session, then [`Calibration::poll`]
/// once per loop iteration with the current button level until it reports
/// [`CalibrationStatus::Complete`].
#[derive(Debug, Clone)]
pub struct Calibration {
    gesture: Gesture,
    phase: Phase,
}

impl Calibration {
    pub const fn new(gesture: Gesture) -> Self {
        Self {
            gesture,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Reset the rudder to the sentinel bounds and suspend transmission
    pub fn begin<A: AnalogInput>(&mut self, rudder: &mut LocalRudder<A>) {
        if self.is_active() {
            return;
        }
        log_info!("calibration started");
        rudder.begin_session();
        self.phase = Phase::WaitForPress;
    }

    /// Advance the session by one step
    ///
    /// `pressed` is the current (active-high) button level.
    pub fn poll<A: AnalogInput>(
        &mut self,
        rudder: &mut LocalRudder<A>,
        pressed: bool,
    ) -> CalibrationStatus {
        let at_sweep_level = pressed == self.gesture.sweep_level();

        match self.phase {
            Phase::Idle => CalibrationStatus::Idle,

            Phase::WaitForPress => {
                if at_sweep_level {
                    self.phase = Phase::Sampling;
                    self.sweep(rudder)
                } else {
                    CalibrationStatus::Waiting(Phase::WaitForPress)
                }
            }

            Phase::Sampling => {
                if at_sweep_level {
                    self.sweep(rudder)
                } else {
                    self.commit_center(rudder)
                }
            }

            Phase::WaitForRelease => {
                if pressed {
                    return CalibrationStatus::Waiting(Phase::WaitForRelease);
                }
                self.phase = Phase::Idle;
                rudder.end_session();
                let bounds = rudder.bounds();
                log_info!(
                    "calibration complete: min={} center={} max={}",
                    bounds.min,
                    bounds.center,
                    bounds.max
                );
                CalibrationStatus::Complete(bounds)
            }
        }
    }

    fn sweep<A: AnalogInput>(&mut self, rudder: &mut LocalRudder<A>) -> CalibrationStatus {
        match rudder.sample_live() {
            Ok(current) => {
                rudder.bounds_mut().include(current);
                CalibrationStatus::Live {
                    current,
                    bounds: rudder.bounds(),
                }
            }
            Err(e) => {
                log_warn!("calibration sample failed: {}", e);
                CalibrationStatus::SampleFailed(e)
            }
        }
    }

    fn commit_center<A: AnalogInput>(&mut self, rudder: &mut LocalRudder<A>) -> CalibrationStatus {
        match rudder.sample_precise() {
            Ok(center) => {
                rudder.bounds_mut().set_center(center);
                self.phase = Phase::WaitForRelease;
                log_debug!("calibration center {}", center);
                CalibrationStatus::Waiting(Phase::WaitForRelease)
            }
            Err(e) => {
                log_warn!("calibration center sample failed: {}", e);
                CalibrationStatus::SampleFailed(e)
            }
        }
    }
}
