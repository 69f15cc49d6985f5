use crate::foundation::core::{Rgb8, Vec2};
use crate::foundation::math::{clamp_channel, offset_channel};
use crate::raster::canvas::Canvas;
use crate::raster::noise::hash_noise;

/// Fill every row with an opaque vertical gradient from `top` to `bottom`.
///
/// Row `y` uses `t = y / (height - 1)`; a single-row canvas gets `top`. This is a base fill and
/// writes pixels directly instead of blending.
pub fn fill_gradient(canvas: &mut Canvas, top: Rgb8, bottom: Rgb8) {
    let h = canvas.height();
    let denom = f64::from(h.saturating_sub(1).max(1));
    let (top, bottom) = (top.channels(), bottom.channels());
    for y in 0..h {
        let t = if h > 1 { f64::from(y) / denom } else { 0.0 };
        let mut px = [0u8, 0, 0, 255];
        for c in 0..3 {
            px[c] = clamp_channel(f64::from(top[c]) * (1.0 - t) + f64::from(bottom[c]) * t);
        }
        for dst in canvas.row_mut(y).chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }
}

/// Additive Gaussian-like glow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlowParams {
    /// Center in canvas-relative units (`x / width`, `y / height`).
    pub center: Vec2,
    /// Falloff scale per axis, canvas-relative.
    pub spread: Vec2,
    /// Added color at full intensity.
    pub color: Rgb8,
    /// Per-channel multiplier for `color`.
    pub gain: [f64; 3],
}

impl GlowParams {
    /// Upper-center atmosphere glow used behind every scene.
    pub fn atmosphere(color: Rgb8) -> Self {
        Self {
            center: Vec2::new(0.5, 0.36),
            spread: Vec2::new(0.3, 0.34),
            color,
            gain: [0.18, 0.12, 0.1],
        }
    }
}

/// Add a glow to the color channels, saturating at 255. Alpha is untouched.
pub fn add_glow(canvas: &mut Canvas, params: &GlowParams) {
    let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
    let color = params.color.channels();
    for y in 0..canvas.height() {
        let gy = (f64::from(y) / h - params.center.y) / params.spread.y;
        for (x, px) in canvas.row_mut(y).chunks_exact_mut(4).enumerate() {
            let gx = (x as f64 / w - params.center.x) / params.spread.x;
            let glow = (-(gx * gx + gy * gy)).exp();
            for c in 0..3 {
                px[c] = clamp_channel(
                    f64::from(px[c]) + f64::from(color[c]) * glow * params.gain[c],
                );
            }
        }
    }
}

/// Add seeded film grain: the same signed offset to all three color channels of a pixel.
///
/// `delta = trunc((hash_noise(x, y, seed) - 0.5) * amount)`.
pub fn add_grain(canvas: &mut Canvas, amount: f64, seed: i64) {
    for y in 0..canvas.height() {
        for (x, px) in canvas.row_mut(y).chunks_exact_mut(4).enumerate() {
            let n = hash_noise(x as i64, i64::from(y), seed) - 0.5;
            let delta = (n * amount) as i32;
            for c in px.iter_mut().take(3) {
                *c = offset_channel(*c, delta);
            }
        }
    }
}

/// Radial darkening toward the edges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VignetteParams {
    /// Center in canvas-relative units.
    pub center: Vec2,
    /// Normalizing distance as a fraction of each dimension.
    pub reach: f64,
    /// Darkening at the far edge, `0` disables the pass.
    pub strength: f64,
}

impl VignetteParams {
    /// Normalized distance where darkening begins.
    pub const INNER: f64 = 0.34;
    /// Normalized distance over which darkening ramps to full strength.
    pub const SPAN: f64 = 0.66;
    /// Exponent of the falloff curve.
    pub const CURVE: f64 = 1.4;

    /// Slightly low-centered vignette with the given strength.
    pub fn with_strength(strength: f64) -> Self {
        Self {
            center: Vec2::new(0.5, 0.52),
            reach: 0.62,
            strength,
        }
    }
}

impl Default for VignetteParams {
    fn default() -> Self {
        Self::with_strength(0.48)
    }
}

/// Multiply each color channel by `1 - strength * f^1.4`.
///
/// Runs after all additive and blended passes so it darkens the final image.
pub fn add_vignette(canvas: &mut Canvas, params: &VignetteParams) {
    let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
    let cx = w * params.center.x;
    let cy = h * params.center.y;
    let (rw, rh) = (w * params.reach, h * params.reach);
    let max_d = (rw * rw + rh * rh).sqrt();
    if !(max_d > 0.0) {
        return;
    }
    let inner = VignetteParams::INNER;

    for y in 0..canvas.height() {
        let dy = f64::from(y) - cy;
        for (x, px) in canvas.row_mut(y).chunks_exact_mut(4).enumerate() {
            let dx = x as f64 - cx;
            let d = (dx * dx + dy * dy).sqrt() / max_d;
            let f = ((d - inner) / VignetteParams::SPAN).clamp(0.0, 1.0);
            let dark = 1.0 - params.strength * f.powf(VignetteParams::CURVE);
            for c in px.iter_mut().take(3) {
                *c = clamp_channel(f64::from(*c) * dark);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/field.rs"]
mod tests;
