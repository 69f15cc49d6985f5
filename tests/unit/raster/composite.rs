use super::*;

const WARM: Rgb8 = Rgb8::new(200, 100, 50);

#[test]
fn coverage_0_is_noop() {
    let dst = [1, 2, 3, 4];
    assert_eq!(over_pixel(dst, WARM, 0), dst);
}

#[test]
fn full_coverage_replaces_any_destination() {
    for dst in [[0, 0, 0, 0], [255, 255, 255, 255], [10, 220, 30, 77]] {
        assert_eq!(over_pixel(dst, WARM, 255), [200, 100, 50, 255]);
    }
}

#[test]
fn half_coverage_on_transparent_uses_truncating_division() {
    // r = 200*128/255 = 100.39, g = 50.19, b = 25.09
    assert_eq!(over_pixel([0, 0, 0, 0], WARM, 128), [100, 50, 25, 128]);
}

#[test]
fn two_half_blends_differ_from_one_full_blend() {
    let once = over_pixel([0, 0, 0, 0], WARM, 255);
    let twice = over_pixel(over_pixel([0, 0, 0, 0], WARM, 128), WARM, 128);
    // a = 128 + 128*127/255 = 191; r = (200*128 + 100*127)/255 = 150
    assert_eq!(twice, [150, 75, 37, 191]);
    assert_ne!(once, twice);
}

#[test]
fn blend_outside_canvas_is_noop() {
    let mut c = Canvas::new(2, 2).unwrap();
    blend(&mut c, -1, 0, WARM, 255);
    blend(&mut c, 0, 2, WARM, 255);
    blend(&mut c, 2, 1, WARM, 255);
    assert!(c.as_rgba8().iter().all(|&b| b == 0));
}

#[test]
fn blend_touches_exactly_one_pixel() {
    let mut c = Canvas::new(3, 3).unwrap();
    blend(&mut c, 1, 1, WARM, 255);
    for y in 0..3 {
        for x in 0..3 {
            let expected = if (x, y) == (1, 1) {
                [200, 100, 50, 255]
            } else {
                [0, 0, 0, 0]
            };
            assert_eq!(c.pixel(x, y), Some(expected));
        }
    }
}
