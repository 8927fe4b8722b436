use super::*;

const R: ResolvedRange = ResolvedRange {
    start: 1000.0,
    end: 2000.0,
};

#[test]
fn zero_margins_skip_transition_phases() {
    assert_eq!(RegionPhase::classify(999.0, R, 0.0, 0.0), RegionPhase::Before);
    assert_eq!(RegionPhase::classify(1000.0, R, 0.0, 0.0), RegionPhase::Active);
    assert_eq!(RegionPhase::classify(2000.0, R, 0.0, 0.0), RegionPhase::Active);
    assert_eq!(RegionPhase::classify(2001.0, R, 0.0, 0.0), RegionPhase::After);
}

#[test]
fn margins_produce_entering_and_leaving() {
    assert_eq!(RegionPhase::classify(700.0, R, 200.0, 100.0), RegionPhase::Before);
    assert_eq!(RegionPhase::classify(850.0, R, 200.0, 100.0), RegionPhase::Entering);
    assert_eq!(RegionPhase::classify(2050.0, R, 200.0, 100.0), RegionPhase::Leaving);
    assert_eq!(RegionPhase::classify(2101.0, R, 200.0, 100.0), RegionPhase::After);
    assert!(!RegionPhase::Entering.is_reached());
    assert!(RegionPhase::Leaving.is_reached());
}

#[test]
fn crossings_fire_in_order() {
    use PhaseEvent::*;
    use RegionPhase::*;

    assert_eq!(crossing_events(Before, Active).as_slice(), &[Enter]);
    assert_eq!(crossing_events(Entering, After).as_slice(), &[Enter, Leave]);
    assert_eq!(crossing_events(Active, Leaving).as_slice(), &[Leave]);
    assert_eq!(crossing_events(After, Active).as_slice(), &[EnterBack]);
    assert_eq!(crossing_events(After, Before).as_slice(), &[EnterBack, LeaveBack]);
    assert_eq!(crossing_events(Active, Entering).as_slice(), &[LeaveBack]);
    assert!(crossing_events(Before, Entering).is_empty());
    assert!(crossing_events(Active, Active).is_empty());
}
