use super::*;

#[test]
fn ember_haze_stays_below_start_row_and_under_cap() {
    let mut c = Canvas::new(64, 100).unwrap();
    let params = EmberHazeParams::default();
    ember_haze(&mut c, &params);

    for y in 0..58 {
        for x in 0..64 {
            assert_eq!(c.pixel(x, y), Some([0, 0, 0, 0]));
        }
    }
    let mut touched = 0;
    for y in 58..100 {
        for x in 0..64 {
            let a = c.pixel(x, y).unwrap()[3];
            assert!(a <= params.cap);
            if a > 0 {
                touched += 1;
            }
        }
    }
    assert!(touched > 0);
}

#[test]
fn ember_haze_center_row_is_dense() {
    let mut c = Canvas::new(50, 100).unwrap();
    ember_haze(&mut c, &EmberHazeParams::default());
    // row 78 has ny ~ 0, so coverage is about 62 + 18 * sin(12 x / w)
    for x in 0..50 {
        assert!(c.pixel(x, 78).unwrap()[3] >= 43);
    }
}

#[test]
fn specks_follow_noise_threshold() {
    let params = SpeckleParams {
        start: 0.0,
        stride: 1,
        scale: [1, 1],
        seed: 433,
        threshold: 0.9,
        paint: Paint::new(Rgb8::new(182, 145, 112), 70),
    };
    let mut c = Canvas::new(40, 30).unwrap();
    scatter_specks(&mut c, &params);

    for y in 0..30u32 {
        for x in 0..40u32 {
            let hit = hash_noise(i64::from(x), i64::from(y), 433) > 0.9;
            let a = c.pixel(x, y).unwrap()[3];
            assert_eq!(a == 70, hit, "at ({x},{y})");
        }
    }
}

#[test]
fn specks_respect_stride_and_start() {
    let params = SpeckleParams {
        start: 0.5,
        stride: 2,
        scale: [3, 2],
        seed: 711,
        threshold: 0.0,
        paint: Paint::new(Rgb8::new(236, 178, 122), 130),
    };
    let mut c = Canvas::new(10, 10).unwrap();
    scatter_specks(&mut c, &params);

    for y in 0..10u32 {
        for x in 0..10u32 {
            let a = c.pixel(x, y).unwrap()[3];
            let sampled = y >= 5 && (y - 5) % 2 == 0 && x % 2 == 0;
            let hit = sampled && hash_noise(i64::from(x) * 3, i64::from(y) * 2, 711) > 0.0;
            assert_eq!(a == 130, hit, "at ({x},{y})");
        }
    }
}

#[test]
fn threshold_at_one_draws_nothing() {
    let params = SpeckleParams {
        start: 0.0,
        stride: 1,
        scale: [1, 1],
        seed: 1,
        threshold: 1.0,
        paint: Paint::new(Rgb8::new(255, 255, 255), 255),
    };
    let mut c = Canvas::new(16, 16).unwrap();
    scatter_specks(&mut c, &params);
    assert!(c.as_rgba8().iter().all(|&b| b == 0));
}
