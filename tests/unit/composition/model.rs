use super::*;

#[test]
fn ring_is_evenly_spaced() {
    for (i, dot) in Dot::RING.iter().enumerate() {
        assert_eq!(dot.angle_deg, 45.0 * i as f64);
        assert_eq!(dot.delay, 0.125 * i as f64);
    }
}

#[test]
fn default_geometry_matches_reference() {
    let spec = SpinnerSpec::default();
    assert_eq!(spec.canvas_size, 480);
    assert_eq!(spec.center(), Point::new(240.0, 240.0));
    assert!((spec.ring_radius() - 199.2).abs() < 1e-9);
    assert_eq!(spec.px_per_radius_unit(), 20.0);
}

#[test]
fn dot_centers_go_clockwise_from_top() {
    let spec = SpinnerSpec::default();
    let top = spec.dot_center(&Dot::RING[0]);
    let right = spec.dot_center(&Dot::RING[2]);
    let bottom = spec.dot_center(&Dot::RING[4]);
    let left = spec.dot_center(&Dot::RING[6]);

    assert!((top.x - 240.0).abs() < 1e-9);
    assert!((top.y - 40.8).abs() < 1e-9);
    assert!((right.x - 439.2).abs() < 1e-9);
    assert!((right.y - 240.0).abs() < 1e-9);
    assert!((bottom.y - 439.2).abs() < 1e-9);
    assert!((left.x - 40.8).abs() < 1e-9);
}

#[test]
fn geometry_scales_with_canvas() {
    let small = SpinnerSpec::with_canvas_size(96);
    assert_eq!(small.px_per_radius_unit(), 4.0);
    assert!((small.ring_radius() - 39.84).abs() < 1e-9);
}

#[test]
fn validate_rejects_degenerate_canvas() {
    assert!(SpinnerSpec::with_canvas_size(0).validate().is_err());
    assert!(SpinnerSpec::with_canvas_size(70_000).validate().is_err());
    assert!(SpinnerSpec::with_canvas_size(1).validate().is_ok());
}

#[test]
fn json_defaults_and_errors() {
    assert_eq!(
        SpinnerSpec::from_json_str("{}").unwrap(),
        SpinnerSpec::default()
    );
    assert_eq!(
        SpinnerSpec::from_json_str(r#"{"canvas_size": 240}"#)
            .unwrap()
            .canvas_size,
        240
    );

    let err = SpinnerSpec::from_json_str(r#"{"color": "red"}"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));

    let err = SpinnerSpec::from_json_str(r#"{"canvas_size": 0}"#).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}
