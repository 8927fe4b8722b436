use super::*;

fn museum(n: usize) -> SlideGroupDef {
    SlideGroupDef::new(
        "museum",
        (0..n).map(|i| format!(".cover-slide-{i}")),
        6000.0,
        9000.0,
    )
}

#[test]
fn equal_fractions_by_default() {
    assert_eq!(museum(3).fractions(), vec![0.0, 0.5, 1.0]);
    assert_eq!(museum(1).fractions(), vec![0.0]);
}

#[test]
fn segments_partition_contiguously() {
    let env = ResolvedRange {
        start: 6000.0,
        end: 9000.0,
    };
    let segs = segment_ranges(env, &museum(4).fractions());
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[0].start, 6000.0);
    assert_eq!(segs[2].end, 9000.0);
    for w in segs.windows(2) {
        assert_eq!(w[0].end, w[1].start);
        assert!(w[0].start < w[0].end);
    }
}

#[test]
fn boundaries_must_be_monotonic() {
    let ok = museum(3).with_boundaries(vec![0.0, 0.3, 1.0]);
    ok.validate().unwrap();

    let err = museum(3)
        .with_boundaries(vec![0.0, 0.8, 0.5])
        .validate()
        .unwrap_err();
    assert!(err.is_invalid_range());

    assert!(museum(3).with_boundaries(vec![0.1, 0.5, 1.0]).validate().is_err());
    assert!(museum(3).with_boundaries(vec![0.0, 1.0]).validate().is_err());
    assert!(museum(1).with_boundaries(vec![0.0]).validate().is_err());
}

#[test]
fn validate_rejects_empty_groups() {
    let mut g = museum(2);
    g.slides.clear();
    assert!(g.validate().is_err());
    let mut g = museum(2);
    g.slides[1] = " ".into();
    assert!(g.validate().is_err());
}

#[test]
fn group_def_deserializes_with_defaults() {
    let json = r#"{
        "name": "museum",
        "slides": [".a", ".b", ".c"],
        "start": "top top",
        "end": "+=1920px",
        "trigger": { "top": 6000.0, "height": 900.0 },
        "scrub": 1
    }"#;
    let g: SlideGroupDef = serde_json::from_str(json).unwrap();
    g.validate().unwrap();
    assert!(g.pinned && g.snap && g.pin_spacing);
    assert_eq!(g.scrub, Scrub::Smoothed { lag_secs: 1.0 });
    assert!(g.envelope().pinned);
}
