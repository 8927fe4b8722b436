use super::*;

#[test]
fn window_maps_region_progress() {
    let b = BindingDef::tween(".line", Property::X, -100.0, 0.0, Ease::Linear)
        .with_window(0.5, 1.0)
        .resolve(&mut TargetTable::new());
    assert_eq!(b.value_at(0.25), -100.0);
    assert_eq!(b.value_at(0.75), -50.0);
    assert_eq!(b.value_at(1.0), 0.0);
}

#[test]
fn validate_rejects_bad_windows_and_targets() {
    let ok = BindingDef::tween(".a", Property::Opacity, 0.0, 1.0, Ease::Linear);
    assert!(ok.validate().is_ok());
    assert!(ok.clone().with_window(0.6, 0.6).validate().is_err());
    assert!(ok.clone().with_window(-0.1, 0.5).validate().is_err());
    assert!(ok.clone().with_window(0.0, f64::NAN).validate().is_err());

    let mut blank = ok;
    blank.target = "  ".to_owned();
    assert!(matches!(
        blank.validate(),
        Err(ScrollyteError::Validation(_))
    ));
}

#[test]
fn property_names_match_serde() {
    for p in [
        Property::Opacity,
        Property::XPercent,
        Property::ClipRadius,
        Property::StrokeDashOffset,
    ] {
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, format!("\"{}\"", p.name()));
    }
}

#[test]
fn binding_def_deserializes_with_default_window() {
    let json = r#"{
        "target": ".glass-layer",
        "property": "clipRadius",
        "timeline": { "Tween": { "from": 0.0, "to": 150.0 } }
    }"#;
    let def: BindingDef = serde_json::from_str(json).unwrap();
    assert_eq!(def.window, Window::FULL);
    assert_eq!(def.timeline.sample(1.0), 150.0);
}
