use super::*;

#[test]
fn reference_size_is_identity() {
    let s = Stage::default();
    assert_eq!(s.pt(180.0, 637.5), Point::new(180.0, 637.5));
    assert_eq!(s.radii(200.0, 70.0), Vec2::new(200.0, 70.0));
    assert_eq!(s.len(2.2), 2.2);
    assert_eq!(s.rect(1.0, 2.0, 3.0, 4.0), Rect::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn half_size_scales_down() {
    let s = Stage::new(Size::new(800, 450).unwrap());
    assert_eq!(s.pt(1600.0, 900.0), Point::new(800.0, 450.0));
    assert_eq!(s.len(10.0), 5.0);
}

#[test]
fn anisotropic_lengths_use_geometric_mean() {
    let s = Stage::new(Size::new(3200, 900).unwrap());
    assert_eq!(s.radii(10.0, 10.0), Vec2::new(20.0, 10.0));
    assert!((s.len(10.0) - 10.0 * 2f64.sqrt()).abs() < 1e-12);
}
