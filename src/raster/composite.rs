use crate::foundation::core::{Rgb8, Rgba8};
use crate::foundation::math::mul_div255_floor;
use crate::raster::canvas::Canvas;

/// Source-over `color` at `coverage` onto a straight RGBA8 pixel.
///
/// Integer math truncates, so results are reproducible bit for bit:
/// `a' = cov + a * (255 - cov) / 255`, `c' = (src * cov + c * (255 - cov)) / 255`.
pub fn over_pixel(dst: Rgba8, color: Rgb8, coverage: u8) -> Rgba8 {
    if coverage == 0 {
        return dst;
    }

    let sa = u16::from(coverage);
    let inv = 255 - sa;
    let out_a = sa + mul_div255_floor(u16::from(dst[3]), inv);
    if out_a == 0 {
        return dst;
    }

    let mut out = [0u8; 4];
    for (i, src) in color.channels().into_iter().enumerate() {
        let acc = u32::from(src) * u32::from(sa) + u32::from(dst[i]) * u32::from(inv);
        out[i] = (acc / 255) as u8;
    }
    out[3] = out_a.min(255) as u8;
    out
}

/// Blend one pixel of `canvas` in place.
///
/// Coordinates outside the canvas and zero coverage are no-ops, so shapes may straddle the
/// canvas edges without any bounds checks by the caller.
pub fn blend(canvas: &mut Canvas, x: i64, y: i64, color: Rgb8, coverage: u8) {
    if coverage == 0 {
        return;
    }
    let Some(px) = canvas.pixel_mut(x, y) else {
        return;
    };
    let out = over_pixel([px[0], px[1], px[2], px[3]], color, coverage);
    px.copy_from_slice(&out);
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
