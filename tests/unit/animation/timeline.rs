use super::*;

#[test]
fn tween_interpolates_and_clamps() {
    let tl = Timeline::tween(0.0, 100.0, Ease::Linear);
    assert_eq!(tl.sample(0.25), 25.0);
    assert_eq!(tl.sample(-1.0), 0.0);
    assert_eq!(tl.sample(2.0), 100.0);
    assert_eq!(tl.sample(0.0), 0.0);
    assert_eq!(tl.sample(1.0), 100.0);
}

#[test]
fn keyframes_interpolate_between_stops() {
    let tl = Timeline::keyframes([
        (0.0, 0.0, Ease::Linear),
        (0.5, 10.0, Ease::Linear),
        (1.0, 0.0, Ease::Linear),
    ]);
    tl.validate().unwrap();
    assert_eq!(tl.sample(0.25), 5.0);
    assert_eq!(tl.sample(0.5), 10.0);
    assert_eq!(tl.sample(0.75), 5.0);
    assert_eq!(tl.sample(1.0), 0.0);
}

#[test]
fn keyframes_hold_outside_stop_range() {
    let tl = Timeline::keyframes([(0.2, 1.0, Ease::Linear), (0.8, 3.0, Ease::Linear)]);
    assert_eq!(tl.sample(0.0), 1.0);
    assert_eq!(tl.sample(1.0), 3.0);
}

#[test]
fn invalid_timelines_are_rejected() {
    assert!(Timeline::tween(f64::NAN, 1.0, Ease::Linear).validate().is_err());
    assert!(Timeline::Keyframes(Keyframes { stops: vec![] }).validate().is_err());
    assert!(
        Timeline::keyframes([(0.8, 1.0, Ease::Linear), (0.2, 3.0, Ease::Linear)])
            .validate()
            .is_err()
    );
    assert!(
        Timeline::keyframes([(1.5, 1.0, Ease::Linear)])
            .validate()
            .is_err()
    );
}

#[test]
fn constant_ignores_progress() {
    let tl = Timeline::constant(0.95);
    assert_eq!(tl.sample(0.0), 0.95);
    assert_eq!(tl.sample(1.0), 0.95);
}
