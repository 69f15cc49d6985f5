use super::*;

#[test]
fn size_rejects_zero_dimensions() {
    assert!(Size::new(0, 10).is_err());
    assert!(Size::new(10, 0).is_err());
    assert_eq!(Size::new(4, 3).unwrap().byte_len().unwrap(), 48);
}

#[test]
fn default_size_is_scene_resolution() {
    let s = Size::default();
    assert_eq!((s.width, s.height), (1600, 900));
}

#[test]
fn rgb8_serializes_as_triple() {
    let c = Rgb8::new(24, 14, 9);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "[24,14,9]");
    let back: Rgb8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn luma_orders_black_below_white() {
    assert!(Rgb8::new(0, 0, 0).luma() < Rgb8::new(255, 255, 255).luma());
}
