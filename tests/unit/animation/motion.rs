use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn adjusted_time_wraps_negative_offsets() {
    assert_eq!(adjusted_time(0.0, 0.0), 0.0);
    assert_eq!(adjusted_time(0.0, 0.125), 0.875);
    assert_eq!(adjusted_time(0.25, 0.5), 0.75);
    assert!(approx(adjusted_time(3.4, 0.0), 0.4));
    assert!(approx(adjusted_time(-2.25, 0.0), 0.75));
    for i in 0..40 {
        let a = adjusted_time(i as f64 * 0.173 - 3.0, 0.625);
        assert!((0.0..CYCLE).contains(&a), "{a}");
    }
}

#[test]
fn phase_boundaries_are_half_open() {
    assert_eq!(Phase::at(0.0), Phase::Grow { t: 0.0 });
    assert_eq!(Phase::at(SHRINK_START), Phase::Shrink { t: 0.0 });
    assert_eq!(Phase::at(REST_START), Phase::Rest);
    assert!(matches!(Phase::at(0.3329), Phase::Grow { .. }));
    assert!(matches!(Phase::at(0.6659), Phase::Shrink { .. }));
    assert_eq!(Phase::at(0.9999), Phase::Rest);
}

#[test]
fn radius_at_cycle_start_is_zero() {
    assert_eq!(radius(0.0, 0.0), 0.0);
    assert_eq!(radius(0.5, 0.5), 0.0);
}

#[test]
fn radius_at_grow_midpoint_is_half_peak() {
    let r = radius(0.1665, 0.0);
    assert!(r > 0.0 && r < MAX_RADIUS);
    assert!((r - 1.0).abs() < 1e-6, "{r}");
}

#[test]
fn radius_peaks_at_shrink_start() {
    assert_eq!(Phase::at(SHRINK_START).radius(), MAX_RADIUS);
    assert!(approx(radius(SHRINK_START, 0.0), MAX_RADIUS));
}

#[test]
fn radius_is_zero_from_rest_start() {
    assert!(radius(REST_START, 0.0) < 1e-9);
    assert_eq!(Phase::at(REST_START).radius(), 0.0);
    assert_eq!(radius(0.8, 0.0), 0.0);
    assert_eq!(radius(0.99, 0.0), 0.0);
}

#[test]
fn radius_stays_in_range() {
    for i in -500..=500 {
        let t = i as f64 * 0.0137;
        for k in 0..8 {
            let r = radius(t, k as f64 * 0.125);
            assert!((0.0..=MAX_RADIUS).contains(&r), "t={t} k={k} r={r}");
        }
    }
}

#[test]
fn radius_is_periodic() {
    for i in 0..200 {
        let t = i as f64 * 0.0071 - 0.4;
        for d in [0.0, 0.125, 0.375, 0.875, 1.3, -0.2] {
            let a = radius(t, d);
            let b = radius(t + CYCLE, d);
            assert!((a - b).abs() < 1e-6, "t={t} d={d}: {a} vs {b}");
        }
    }
}

#[test]
fn delay_shifts_the_curve() {
    assert!(approx(radius(0.25, 0.125), radius(0.125, 0.0)));
    assert!(approx(radius(0.0, 0.875), radius(0.125, 0.0)));
}

#[test]
fn grow_then_shrink_is_monotonic() {
    let mut prev = radius(0.0, 0.0);
    for i in 1..33 {
        let r = radius(i as f64 * 0.01, 0.0);
        assert!(r >= prev);
        prev = r;
    }
    let mut prev = radius(SHRINK_START, 0.0);
    for i in 34..66 {
        let r = radius(i as f64 * 0.01, 0.0);
        assert!(r <= prev);
        prev = r;
    }
}

#[test]
fn non_finite_inputs_rest() {
    assert_eq!(radius(f64::NAN, 0.0), 0.0);
    assert_eq!(radius(f64::INFINITY, 0.0), 0.0);
    assert_eq!(radius(0.1, f64::NEG_INFINITY), 0.0);
}
