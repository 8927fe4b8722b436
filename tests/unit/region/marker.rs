use super::*;

fn ctx(top: f64, height: f64, vh: f64) -> MarkerCtx {
    MarkerCtx {
        element: Some(ElementBox::new(top, height)),
        viewport_height: vh,
        viewport_width: 1280.0,
    }
}

#[test]
fn parses_all_marker_forms() {
    assert_eq!("1200".parse::<Marker>().unwrap(), Marker::Offset(1200.0));
    assert_eq!(
        "top 80%".parse::<Marker>().unwrap(),
        Marker::Trigger {
            element: Length::Percent(0.0),
            viewport: Length::Percent(80.0),
        }
    );
    assert_eq!(
        "center center".parse::<Marker>().unwrap(),
        Marker::Trigger {
            element: Length::Percent(50.0),
            viewport: Length::Percent(50.0),
        }
    );
    assert_eq!(
        "+=100%".parse::<Marker>().unwrap(),
        Marker::Relative(Length::Percent(100.0))
    );
    assert_eq!(
        "-=40px".parse::<Marker>().unwrap(),
        Marker::Relative(Length::Px(-40.0))
    );
    assert!("top".parse::<Marker>().is_err());
    assert!("a b c".parse::<Marker>().is_err());
    assert!("top nowhere".parse::<Marker>().is_err());
}

#[test]
fn display_round_trips() {
    for s in ["top 80%", "bottom top", "center 100px", "+=100%", "-=40px", "+=150vw", "-=25vw", "1200"] {
        let m: Marker = s.parse().unwrap();
        assert_eq!(m.to_string(), s);
        assert_eq!(m.to_string().parse::<Marker>().unwrap(), m);
    }
}

#[test]
fn trigger_markers_resolve_against_element_and_viewport() {
    let c = ctx(2000.0, 1000.0, 800.0);
    let top_top: Marker = "top top".parse().unwrap();
    let top_80: Marker = "top 80%".parse().unwrap();
    let bottom_top: Marker = "bottom top".parse().unwrap();
    let center_center: Marker = "center center".parse().unwrap();
    assert_eq!(top_top.resolve_start(c).unwrap(), 2000.0);
    assert_eq!(top_80.resolve_start(c).unwrap(), 2000.0 - 640.0);
    assert_eq!(bottom_top.resolve_end(0.0, c).unwrap(), 3000.0);
    assert_eq!(center_center.resolve_end(0.0, c).unwrap(), 2500.0 - 400.0);
}

#[test]
fn relative_end_adds_to_start() {
    let c = ctx(0.0, 0.0, 900.0);
    let m: Marker = "+=100%".parse().unwrap();
    assert_eq!(m.resolve_end(1000.0, c).unwrap(), 1900.0);
    assert!(m.resolve_start(c).is_err());
}

#[test]
fn width_relative_end_tracks_viewport_width() {
    let m: Marker = "+=100vw".parse().unwrap();
    assert_eq!(m, Marker::RelativeWidth(100.0));
    assert!(m.is_relative());
    assert!(m.depends_on_viewport());

    let narrow = MarkerCtx {
        element: None,
        viewport_height: 800.0,
        viewport_width: 1000.0,
    };
    let wide = MarkerCtx {
        viewport_width: 1600.0,
        ..narrow
    };
    assert_eq!(m.resolve_end(500.0, narrow).unwrap(), 1500.0);
    assert_eq!(m.resolve_end(500.0, wide).unwrap(), 2100.0);
    assert!(m.resolve_start(wide).is_err());
    assert!("+=abcvw".parse::<Marker>().is_err());
}

#[test]
fn trigger_without_element_is_a_validation_error() {
    let c = MarkerCtx {
        element: None,
        viewport_height: 800.0,
        viewport_width: 1280.0,
    };
    let m: Marker = "top top".parse().unwrap();
    assert!(matches!(
        m.resolve_start(c),
        Err(ScrollyteError::Validation(_))
    ));
    assert!(m.needs_element());
}

#[test]
fn serde_accepts_numbers_and_strings() {
    let a: Marker = serde_json::from_str("1500").unwrap();
    let b: Marker = serde_json::from_str("\"top 80%\"").unwrap();
    assert_eq!(a, Marker::Offset(1500.0));
    assert!(b.depends_on_viewport());
    assert!(!a.depends_on_viewport());
    assert_eq!(serde_json::to_string(&b).unwrap(), "\"top 80%\"");
}
