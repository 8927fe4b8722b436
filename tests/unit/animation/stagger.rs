use super::*;

#[test]
fn windows_cover_unit_interval_in_order() {
    let w = stagger_windows(4, 0.5);
    assert_eq!(w.len(), 4);
    assert_eq!(w[0].start, 0.0);
    assert_eq!(w[3].end, 1.0);
    assert!(w.windows(2).all(|p| p[0].start < p[1].start));
    for win in &w {
        win.validate().unwrap();
    }
}

#[test]
fn zero_each_plays_together() {
    for win in stagger_windows(3, 0.0) {
        assert_eq!(win, Window::FULL);
    }
    assert!(stagger_windows(0, 0.2).is_empty());
}

#[test]
fn alternating_sides() {
    assert_eq!(alternating(0, 100.0), -100.0);
    assert_eq!(alternating(1, 100.0), 100.0);
    assert_eq!(alternating(2, 100.0), -100.0);
}

#[test]
fn radial_offsets_lie_on_circle() {
    let v = radial_offset(0, 100.0);
    assert!((v.x - 100.0).abs() < 1e-9);
    assert!(v.y.abs() < 1e-9);
    let v = radial_offset(3, 50.0);
    assert!((v.hypot() - 50.0).abs() < 1e-9);
}

#[test]
fn expand_builds_one_binding_per_target() {
    let def = StaggerDef {
        targets: vec![".l0".into(), ".l1".into(), ".l2".into()],
        property: Property::X,
        pattern: StaggerPattern::Alternating { magnitude: 100.0 },
        each: 0.25,
        ease: Ease::Linear,
    };
    let bindings = def.expand().unwrap();
    assert_eq!(bindings.len(), 3);
    assert_eq!(bindings[0].timeline.sample(0.0), -100.0);
    assert_eq!(bindings[1].timeline.sample(0.0), 100.0);
    assert!(bindings.iter().all(|b| b.timeline.sample(1.0) == 0.0));
    assert!(bindings[1].window.start > bindings[0].window.start);
}

#[test]
fn expand_rejects_invalid_definitions() {
    let mut def = StaggerDef {
        targets: vec![],
        property: Property::Opacity,
        pattern: StaggerPattern::Uniform { from: 0.0, to: 1.0 },
        each: 0.1,
        ease: Ease::Linear,
    };
    assert!(def.expand().is_err());
    def.targets.push(".a".into());
    def.each = -1.0;
    assert!(def.expand().is_err());
    def.each = 0.1;
    def.pattern = StaggerPattern::Radial {
        radius: f64::INFINITY,
        axis: Axis::Y,
    };
    assert!(def.expand().is_err());
}
