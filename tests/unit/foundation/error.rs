use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollyteError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollyteError::invalid_range("x")
            .to_string()
            .contains("invalid range error:")
    );
    assert!(
        ScrollyteError::pin_overlap("x")
            .to_string()
            .contains("pin overlap error:")
    );
    assert!(
        ScrollyteError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        ScrollyteError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollyteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: ScrollyteError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ScrollyteError::Serde(_)));
    assert!(!err.is_invalid_range());
}
