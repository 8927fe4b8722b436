use super::*;

#[test]
fn play_advances_and_stops_at_end() {
    let mut p = Playhead::default();
    p.apply(ToggleAction::Play, false);
    assert_eq!(p.direction, PlayDirection::Forward);
    p.advance(0.25, 1.0);
    assert_eq!(p.position, 0.25);
    p.advance(2.0, 1.0);
    assert_eq!(p.position, 1.0);
    assert_eq!(p.direction, PlayDirection::Paused);
}

#[test]
fn reverse_and_resume() {
    let mut p = Playhead::default();
    p.apply(ToggleAction::Complete, false);
    assert_eq!(p.position, 1.0);
    p.apply(ToggleAction::Reverse, false);
    p.advance(0.5, 2.0);
    assert_eq!(p.position, 0.75);
    p.apply(ToggleAction::Pause, false);
    p.advance(1.0, 2.0);
    assert_eq!(p.position, 0.75);
    p.apply(ToggleAction::Resume, false);
    assert_eq!(p.direction, PlayDirection::Backward);
}

#[test]
fn instant_actions_complete_immediately() {
    let mut p = Playhead::default();
    p.apply(ToggleAction::Play, true);
    assert_eq!(p.position, 1.0);
    assert_eq!(p.direction, PlayDirection::Paused);
    p.apply(ToggleAction::Reverse, true);
    assert_eq!(p.position, 0.0);
    p.apply(ToggleAction::Restart, true);
    assert_eq!(p.position, 1.0);
    p.apply(ToggleAction::Reset, true);
    assert_eq!(p.position, 0.0);
}

#[test]
fn chase_converges_without_overshoot() {
    let mut p = Playhead::default();
    let mut last = 0.0;
    for _ in 0..1200 {
        p.chase(0.8, 1.0 / 60.0, 1.0);
        assert!(p.position >= last);
        assert!(p.position <= 0.8);
        last = p.position;
    }
    assert_eq!(p.position, 0.8);

    let mut q = Playhead::default();
    q.chase(0.5, 0.016, 0.0);
    assert_eq!(q.position, 0.5);
}
