use super::*;

#[test]
fn user_id_display_and_str_views_agree() {
    let id = UserId::from("AB");
    assert_eq!(id.as_str(), "AB");
    assert_eq!(id.to_string(), "AB");
    assert_eq!(id, UserId("AB".to_owned()));
}

#[test]
fn surface_spec_defaults_to_identity_scale() {
    let spec = SurfaceSpec::new(640, 480);
    assert_eq!(spec.device_pixel_scale, 1.0);

    let scaled = spec.with_scale(2.0);
    assert_eq!(scaled.logical_width, 640);
    assert_eq!(scaled.device_pixel_scale, 2.0);
}

#[test]
fn cursor_position_round_trips_through_serde() {
    let pos = CursorPosition::new(12.5, -3.0);
    let json = serde_json::to_string(&pos).unwrap();
    let back: CursorPosition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pos);
}
