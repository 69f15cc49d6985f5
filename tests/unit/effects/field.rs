use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> Canvas {
    Canvas::from_rgba8(w, h, px.repeat((w * h) as usize)).unwrap()
}

fn row_luma(c: &Canvas, y: u32) -> f64 {
    let px = c.pixel(0, y).unwrap();
    Rgb8::new(px[0], px[1], px[2]).luma()
}

#[test]
fn gradient_endpoints_are_exact() {
    let mut c = Canvas::new(4, 4).unwrap();
    fill_gradient(&mut c, Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255));
    for x in 0..4 {
        assert_eq!(c.pixel(x, 0), Some([0, 0, 0, 255]));
        assert_eq!(c.pixel(x, 3), Some([255, 255, 255, 255]));
    }
}

#[test]
fn gradient_is_monotonic_from_dark_top() {
    let mut c = Canvas::new(3, 50).unwrap();
    fill_gradient(&mut c, Rgb8::new(24, 14, 9), Rgb8::new(84, 40, 28));
    for y in 1..50 {
        assert!(row_luma(&c, y - 1) <= row_luma(&c, y));
    }
    assert!(row_luma(&c, 0) <= row_luma(&c, 49));
}

#[test]
fn gradient_single_row_uses_top() {
    let mut c = Canvas::new(2, 1).unwrap();
    fill_gradient(&mut c, Rgb8::new(10, 20, 30), Rgb8::new(200, 200, 200));
    assert_eq!(c.pixel(1, 0), Some([10, 20, 30, 255]));
}

#[test]
fn glow_peaks_at_center_and_fades() {
    let mut c = solid(10, 10, [0, 0, 0, 255]);
    add_glow(
        &mut c,
        &GlowParams {
            center: Vec2::new(0.5, 0.5),
            spread: Vec2::new(0.3, 0.3),
            color: Rgb8::new(100, 100, 100),
            gain: [1.0, 1.0, 1.0],
        },
    );
    assert_eq!(c.pixel(5, 5), Some([100, 100, 100, 255]));
    assert_eq!(c.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn glow_saturates_and_keeps_alpha() {
    let mut c = solid(4, 4, [250, 250, 250, 40]);
    add_glow(
        &mut c,
        &GlowParams {
            center: Vec2::new(0.5, 0.5),
            spread: Vec2::new(10.0, 10.0),
            color: Rgb8::new(255, 255, 255),
            gain: [1.0, 1.0, 1.0],
        },
    );
    assert!(
        c.as_rgba8()
            .chunks_exact(4)
            .all(|px| px == [255, 255, 255, 40])
    );
}

#[test]
fn atmosphere_glow_uses_per_channel_gains() {
    let g = GlowParams::atmosphere(Rgb8::new(1, 2, 3));
    assert_eq!(g.gain, [0.18, 0.12, 0.1]);
    assert_eq!(g.center, Vec2::new(0.5, 0.36));
}

#[test]
fn grain_offsets_color_channels_by_truncated_noise() {
    let mut c = solid(2, 1, [100, 100, 100, 255]);
    add_grain(&mut c, 10.0, 0);
    // hash(0,0,0) = 0 -> delta -5; hash(1,0,0) = 0.016 -> delta trunc(-4.84) = -4
    assert_eq!(c.pixel(0, 0), Some([95, 95, 95, 255]));
    assert_eq!(c.pixel(1, 0), Some([96, 96, 96, 255]));
}

#[test]
fn grain_is_bounded_and_deterministic() {
    let base = solid(16, 16, [128, 128, 128, 77]);
    let mut a = base.clone();
    let mut b = base.clone();
    add_grain(&mut a, 10.0, 2016);
    add_grain(&mut b, 10.0, 2016);
    assert_eq!(a, b);
    for px in a.as_rgba8().chunks_exact(4) {
        assert!((123..=133).contains(&px[0]));
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 77);
    }
}

#[test]
fn grain_clamps_at_channel_limits() {
    let mut c = solid(8, 8, [0, 255, 0, 255]);
    add_grain(&mut c, 200.0, 5);
    assert!(c.as_rgba8().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn vignette_darkens_edges_only() {
    let mut c = solid(100, 100, [200, 200, 200, 255]);
    add_vignette(&mut c, &VignetteParams::with_strength(0.5));
    assert_eq!(c.pixel(50, 52), Some([200, 200, 200, 255]));
    let corner = c.pixel(0, 0).unwrap();
    assert!(corner[0] < 200);
    assert_eq!(corner[3], 255);
}

#[test]
fn vignette_strength_zero_is_identity() {
    let base = solid(20, 10, [90, 60, 30, 200]);
    let mut c = base.clone();
    add_vignette(&mut c, &VignetteParams::with_strength(0.0));
    assert_eq!(c, base);
}

#[test]
fn vignette_default_strength() {
    assert_eq!(VignetteParams::default().strength, 0.48);
}
