//! Local rudder sensor
//!
//! Couples the potentiometer input with its calibrated bounds, the deadband
//! and the calibration session flag. In firmware one `LocalRudder` sits
//! behind a mutex shared by the transmitter and the panel task, so the
//! session flag and the bounds are always read under the same lock.

use rudderlink_hal::{AdcError, AnalogInput};
use rudderlink_protocol::Reading;

use crate::config::{ConfigError, LinkConfig};
use crate::signal::{normalize, read_averaged, scale, Bounds, Deadband, OutputKind, ScaleError};

/// Steering travel, centered on zero degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Travel {
    degrees: f64,
}

impl Travel {
    pub const fn new(degrees: f64) -> Self {
        Self { degrees }
    }

    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Whole degrees, truncated toward zero
    pub fn local_angle(&self, normalized: f64) -> Result<i32, ScaleError> {
        let half = self.degrees / 2.0;
        scale(normalized, -half, half, OutputKind::Integer).map(|deg| deg as i32)
    }

    /// Degrees rounded to one decimal, `None` for an invalid reading
    pub fn remote_angle(&self, reading: Reading) -> Option<f64> {
        let half = self.degrees / 2.0;
        let deg = scale(reading.value()?, -half, half, OutputKind::Float).ok()?;
        // `+ 0.0` folds -0.0 so it never prints with a sign
        Some(libm::round(deg * 10.0) / 10.0 + 0.0)
    }
}

impl Default for Travel {
    fn default() -> Self {
        Self::new(120.0)
    }
}

/// Potentiometer with calibration state
pub struct LocalRudder<A> {
    sensor: A,
    bounds: Bounds,
    deadband: Deadband,
    travel: Travel,
    live_samples: u16,
    precise_samples: u16,
    calibrating: bool,
}

impl<A: AnalogInput> LocalRudder<A> {
    /// Create with 100/1000 conversions per live/precise sample
    pub fn new(sensor: A, bounds: Bounds, deadband: Deadband, travel: Travel) -> Self {
        Self {
            sensor,
            bounds,
            deadband,
            travel,
            live_samples: 100,
            precise_samples: 1000,
            calibrating: false,
        }
    }

    pub fn from_config(sensor: A, config: &LinkConfig) -> Result<Self, ConfigError> {
        let rudder = Self::new(sensor, config.bounds(), config.deadband()?, config.travel())
            .with_sample_counts(config.sensor.live_samples, config.sensor.precise_samples);
        Ok(rudder)
    }

    pub fn with_sample_counts(mut self, live: u16, precise: u16) -> Self {
        self.live_samples = live;
        self.precise_samples = precise;
        self
    }

    pub fn sensor_mut(&mut self) -> &mut A {
        &mut self.sensor
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn deadband(&self) -> Deadband {
        self.deadband
    }

    pub fn travel(&self) -> Travel {
        self.travel
    }

    pub fn is_calibrating(&self) -> bool {
        self.calibrating
    }

    /// Averaged raw sample for live refresh
    pub fn sample_live(&mut self) -> Result<u16, AdcError> {
        read_averaged(&mut self.sensor, self.live_samples)
    }

    /// Averaged raw sample for the calibration center
    pub fn sample_precise(&mut self) -> Result<u16, AdcError> {
        read_averaged(&mut self.sensor, self.precise_samples)
    }

    /// Fresh normalized position, or `None` while a calibration is running
    pub fn poll_normalized(&mut self) -> Option<Result<f64, AdcError>> {
        if self.calibrating {
            return None;
        }
        Some(self.sample_live().map(|raw| normalize(raw, self.bounds, self.deadband)))
    }

    pub(crate) fn begin_session(&mut self) {
        self.bounds = Bounds::sentinel();
        self.calibrating = true;
    }

    pub(crate) fn end_session(&mut self) {
        self.calibrating = false;
    }

    pub(crate) fn bounds_mut(&mut self) -> &mut Bounds {
        &mut self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedAdc;

    fn rudder(adc: ScriptedAdc) -> LocalRudder<ScriptedAdc> {
        LocalRudder::from_config(adc, &LinkConfig::default()).unwrap()
    }

    #[test]
    fn test_center_is_zero_degrees() {
        // 120 degree travel, 1 degree deadband
        let mut r = rudder(ScriptedAdc::constant(32500));
        assert_eq!(r.deadband().raw(), 546);

        let n = r.poll_normalized().unwrap().unwrap();
        assert_eq!(n, 0.5);
        assert_eq!(r.travel().local_angle(n), Ok(0));
        assert_eq!(r.travel().remote_angle(Reading::Valid(n)), Some(0.0));
    }

    #[test]
    fn test_inside_deadband_is_zero_degrees() {
        let mut r = rudder(ScriptedAdc::constant(32500 + 500));
        let n = r.poll_normalized().unwrap().unwrap();
        assert_eq!(r.travel().local_angle(n), Ok(0));
    }

    #[test]
    fn test_full_deflection() {
        let mut r = rudder(ScriptedAdc::constant(0));
        assert_eq!(r.poll_normalized(), Some(Ok(0.0)));
        assert_eq!(r.travel().local_angle(0.0), Ok(-60));

        r.sensor_mut().set_script(&[u16::MAX]);
        assert_eq!(r.poll_normalized(), Some(Ok(1.0)));
    }

    #[test]
    fn test_live_sample_averages() {
        let mut r = rudder(ScriptedAdc::constant(1234));
        r.poll_normalized();
        assert_eq!(r.sensor_mut().reads(), 100);
    }

    #[test]
    fn test_suspended_while_calibrating() {
        let mut r = rudder(ScriptedAdc::constant(32500));
        r.begin_session();
        assert!(r.is_calibrating());
        assert_eq!(r.bounds(), Bounds::sentinel());
        assert_eq!(r.poll_normalized(), None);
        assert_eq!(r.sensor_mut().reads(), 0);

        r.end_session();
        assert!(r.poll_normalized().is_some());
    }

    #[test]
    fn test_adc_failure_surfaces() {
        let mut r = rudder(ScriptedAdc::constant(5).fail_after(0));
        assert_eq!(r.poll_normalized(), Some(Err(AdcError::Conversion)));
    }

    #[test]
    fn test_remote_angle_rounding() {
        let travel = Travel::default();
        assert_eq!(travel.remote_angle(Reading::Invalid), None);
        // 0.7312 -> 27.744
        assert_eq!(travel.remote_angle(Reading::Valid(0.7312)), Some(27.7));
        assert_eq!(travel.remote_angle(Reading::Valid(0.0)), Some(-60.0));
        let near_zero = travel.remote_angle(Reading::Valid(0.4996)).unwrap();
        assert!(near_zero.is_sign_positive());
    }

    #[test]
    fn test_local_angle_rejects_out_of_range() {
        assert_eq!(Travel::default().local_angle(1.5), Err(ScaleError::OutOfRange));
    }
}
