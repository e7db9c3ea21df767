//! Raw sample to normalized position

use super::{Bounds, Deadband};

/// Saturating linear ratio of `value` within `[lo, hi]`
///
/// Values above `hi` give 1.0, values below `lo` give 0.0. A degenerate
/// range (`hi <= lo`) gives 0.0 for anything not above `hi`.
pub fn norm(value: i32, lo: i32, hi: i32) -> f64 {
    if value > hi {
        1.0
    } else if value < lo || hi <= lo {
        0.0
    } else {
        f64::from(value - lo) / f64::from(hi - lo)
    }
}

/// Map a raw sample to `[0, 1]` around the calibrated center
///
/// The low half of the travel maps to `[0, 0.5)`, the high half to
/// `(0.5, 1]`, and anything within `deadband` of the center is exactly 0.5.
pub fn normalize(raw: u16, bounds: Bounds, deadband: Deadband) -> f64 {
    let raw = i32::from(raw);
    let center = i32::from(bounds.center);
    let db = i32::from(deadband.raw());

    let low_edge = center - db;
    let high_edge = center + db;

    if raw < low_edge {
        0.5 * norm(raw, i32::from(bounds.min), low_edge)
    } else if raw > high_edge {
        0.5 + 0.5 * norm(raw, high_edge, i32::from(bounds.max))
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(1000, 61000, 31000)
    }

    #[test]
    fn test_norm_saturates() {
        assert_eq!(norm(50, 100, 200), 0.0);
        assert_eq!(norm(250, 100, 200), 1.0);
        assert_eq!(norm(150, 100, 200), 0.5);
    }

    #[test]
    fn test_norm_degenerate_range() {
        assert_eq!(norm(100, 100, 100), 0.0);
        assert_eq!(norm(101, 100, 100), 1.0);
    }

    #[test]
    fn test_endpoints() {
        let db = Deadband::from_raw(500);
        assert_eq!(normalize(1000, bounds(), db), 0.0);
        assert_eq!(normalize(61000, bounds(), db), 1.0);
        assert_eq!(normalize(0, bounds(), db), 0.0);
        assert_eq!(normalize(u16::MAX, bounds(), db), 1.0);
    }

    #[test]
    fn test_center_is_half() {
        assert_eq!(normalize(31000, bounds(), Deadband::from_raw(0)), 0.5);
        assert_eq!(normalize(31000, bounds(), Deadband::from_raw(546)), 0.5);
    }

    #[test]
    fn test_deadband_edges() {
        let db = Deadband::from_raw(500);
        assert_eq!(normalize(30500, bounds(), db), 0.5);
        assert_eq!(normalize(31500, bounds(), db), 0.5);
        assert!(normalize(30499, bounds(), db) < 0.5);
        assert!(normalize(31501, bounds(), db) > 0.5);
    }

    #[test]
    fn test_deadband_near_zero_does_not_wrap() {
        let b = Bounds::new(0, 65535, 10);
        let db = Deadband::from_raw(546);
        assert_eq!(normalize(0, b, db), 0.5);
        assert_eq!(normalize(65535, b, db), 1.0);
    }

    #[test]
    fn test_halfway_on_each_side() {
        let db = Deadband::from_raw(0);
        assert_eq!(normalize(16000, bounds(), db), 0.25);
        assert_eq!(normalize(46000, bounds(), db), 0.75);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        /// Bounds with room for the deadband on both sides of the center
        fn valid_setup() -> impl Strategy<Value = (Bounds, Deadband)> {
            (0u16..2000, 0u16..20000, 0u16..2000).prop_flat_map(|(db, low_span, high_extra)| {
                let db = db as u32;
                let min_center = db + u32::from(low_span) + 1;
                let max_center = 65535 - db - 1 - u32::from(high_extra);
                (Just(db), Just(low_span), Just(high_extra), min_center..=max_center)
            })
            .prop_map(|(db, low_span, high_extra, center)| {
                let min = center - db - u32::from(low_span) - 1;
                let max = (center + db + 1 + u32::from(high_extra)).min(65535);
                (
                    Bounds::new(min as u16, max as u16, center as u16),
                    Deadband::from_raw(db as u16),
                )
            })
        }

        proptest! {
            #[test]
            fn in_unit_range((b, db) in valid_setup(), t in 0.0f64..=1.0) {
                let raw = b.min as f64 + t * (b.max - b.min) as f64;
                let v = normalize(raw as u16, b, db);
                prop_assert!((0.0..=1.0).contains(&v));
            }

            #[test]
            fn monotonic((b, db) in valid_setup(), a in any::<u16>(), c in any::<u16>()) {
                let (lo, hi) = if a <= c { (a, c) } else { (c, a) };
                prop_assert!(normalize(lo, b, db) <= normalize(hi, b, db));
            }

            #[test]
            fn deadband_is_exactly_half((b, db) in valid_setup(), offset in -1.0f64..=1.0) {
                let raw = i32::from(b.center) + (offset * f64::from(db.raw())) as i32;
                prop_assert_eq!(normalize(raw as u16, b, db), 0.5);
            }
        }
    }
}
