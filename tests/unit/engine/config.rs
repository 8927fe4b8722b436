use super::*;

#[test]
fn defaults_fill_missing_fields() {
    let cfg = EngineConfig::from_json_str(r#"{ "reduced_motion": true }"#).unwrap();
    assert!(cfg.reduced_motion);
    assert_eq!(cfg.snap, SnapConfig::default());
    assert_eq!(cfg.max_pin_overlap, None);

    let cfg = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, EngineConfig::default());
}

#[test]
fn invalid_values_are_rejected() {
    assert!(EngineConfig::from_json_str(r#"{ "snap": { "radius": 2.0 } }"#).is_err());
    assert!(
        EngineConfig::from_json_str(r#"{ "snap": { "velocity_threshold": -1.0 } }"#).is_err()
    );
    assert!(EngineConfig::from_json_str(r#"{ "max_pin_overlap": -5.0 }"#).is_err());
    assert!(matches!(
        EngineConfig::from_json_str("not json"),
        Err(ScrollyteError::Serde(_))
    ));
}
