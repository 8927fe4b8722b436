use super::*;

#[test]
fn progress_is_clamped() {
    assert_eq!(progress(500.0, 1000.0, 2000.0), 0.0);
    assert_eq!(progress(1500.0, 1000.0, 2000.0), 0.5);
    assert_eq!(progress(9000.0, 1000.0, 2000.0), 1.0);
    assert_eq!(progress(5.0, 10.0, 10.0), 0.0);
    assert_eq!(progress(10.0, 10.0, 10.0), 1.0);
}

#[test]
fn clamp01_handles_nan() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-2.0), 0.0);
    assert_eq!(clamp01(2.0), 1.0);
}

#[test]
fn overlap_len_ignores_touching_intervals() {
    assert_eq!(overlap_len((0.0, 10.0), (10.0, 20.0)), 0.0);
    assert_eq!(overlap_len((0.0, 10.0), (4.0, 20.0)), 6.0);
    assert_eq!(overlap_len((0.0, 10.0), (30.0, 40.0)), 0.0);
}

#[test]
fn smoothing_alpha_bounds() {
    assert_eq!(smoothing_alpha(0.016, 0.0), 1.0);
    assert_eq!(smoothing_alpha(0.0, 1.0), 0.0);
    let a = smoothing_alpha(0.5, 1.0);
    assert!(a > 0.0 && a < 1.0);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    assert_eq!(window_progress(0.75, 0.5, 1.0), 0.5);
}
