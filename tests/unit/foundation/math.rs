use super::*;

#[test]
fn fnv_is_streaming_and_matches_reference_vector() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"rubicon");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"rub");
    b.write_bytes(b"icon");
    assert_eq!(a.finish(), b.finish());

    let mut c = Fnv1a64::new_default();
    c.write_bytes(b"a");
    assert_eq!(c.finish(), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn fnv_empty_input_is_offset_basis() {
    assert_eq!(Fnv1a64::new_default().finish(), Fnv1a64::OFFSET_BASIS);
}

#[test]
fn mul_div255_floor_truncates() {
    assert_eq!(mul_div255_floor(255, 255), 255);
    assert_eq!(mul_div255_floor(0, 255), 0);
    // 100 * 128 = 12800, 12800 / 255 = 50.19..
    assert_eq!(mul_div255_floor(100, 128), 50);
    assert_eq!(mul_div255_floor(1, 254), 0);
}

#[test]
fn clamp_channel_saturates_and_truncates() {
    assert_eq!(clamp_channel(-3.0), 0);
    assert_eq!(clamp_channel(f64::NAN), 0);
    assert_eq!(clamp_channel(300.0), 255);
    assert_eq!(clamp_channel(254.99), 254);
    assert_eq!(clamp_channel(0.7), 0);
}

#[test]
fn offset_channel_clamps_both_ends() {
    assert_eq!(offset_channel(3, -5), 0);
    assert_eq!(offset_channel(250, 10), 255);
    assert_eq!(offset_channel(100, -4), 96);
}

#[test]
fn scale_coverage_truncates() {
    assert_eq!(scale_coverage(200, 0.5), 100);
    assert_eq!(scale_coverage(95, 0.999), 94);
    assert_eq!(scale_coverage(80, -0.2), 0);
}
