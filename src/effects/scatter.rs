use crate::foundation::core::{Rgb8, Vec2};
use crate::foundation::math::clamp_channel;
use crate::raster::canvas::Canvas;
use crate::raster::composite::blend;
use crate::raster::noise::hash_noise;
use crate::raster::shapes::Paint;

/// Rippled band of warm haze across the lower part of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EmberHazeParams {
    /// First row as a fraction of the height.
    pub start: f64,
    /// Band center as a fraction of the height.
    pub center: f64,
    /// Band half-height as a fraction of the height.
    pub half_height: f64,
    /// Coverage at the band center before rippling.
    pub body: f64,
    /// Ripple amplitude in coverage units.
    pub ripple: f64,
    /// Ripple frequency along `x / width` and the normalized row.
    pub frequency: Vec2,
    /// Coverage ceiling.
    pub cap: u8,
    /// Haze color.
    pub color: Rgb8,
}

impl Default for EmberHazeParams {
    fn default() -> Self {
        Self {
            start: 0.58,
            center: 0.78,
            half_height: 0.24,
            body: 62.0,
            ripple: 18.0,
            frequency: Vec2::new(12.0, 5.0),
            cap: 92,
            color: Rgb8::new(192, 104, 76),
        }
    }
}

/// Blend the ember haze band. Coverage per pixel is
/// `min(cap, max(0, body * (1 - |ny|) + ripple * sin(fx * x/w + fy * ny)))`.
pub fn ember_haze(canvas: &mut Canvas, params: &EmberHazeParams) {
    let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
    let first = (h * params.start) as i64;
    for y in first.max(0)..i64::from(canvas.height()) {
        let ny = (y as f64 - h * params.center) / (h * params.half_height);
        for x in 0..i64::from(canvas.width()) {
            let nx = x as f64 / w;
            let wave = (nx * params.frequency.x + ny * params.frequency.y).sin();
            let a = clamp_channel(params.body * (1.0 - ny.abs()) + params.ripple * wave);
            blend(canvas, x, y, params.color, a.min(params.cap));
        }
    }
}

/// Sparse specks placed where seeded noise exceeds a threshold.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpeckleParams {
    /// First row as a fraction of the height.
    pub start: f64,
    /// Sampling stride in pixels along both axes.
    pub stride: u32,
    /// Multipliers applied to `(x, y)` before hashing.
    pub scale: [i64; 2],
    /// Noise seed.
    pub seed: i64,
    /// Specks appear where `hash_noise > threshold`.
    pub threshold: f64,
    /// Speck color and coverage.
    pub paint: Paint,
}

/// Blend single-pixel specks over the sampled grid.
pub fn scatter_specks(canvas: &mut Canvas, params: &SpeckleParams) {
    let stride = params.stride.max(1) as usize;
    let first = (f64::from(canvas.height()) * params.start) as i64;
    for y in (first.max(0)..i64::from(canvas.height())).step_by(stride) {
        for x in (0..i64::from(canvas.width())).step_by(stride) {
            let n = hash_noise(x * params.scale[0], y * params.scale[1], params.seed);
            if n > params.threshold {
                blend(canvas, x, y, params.paint.color, params.paint.alpha);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/scatter.rs"]
mod tests;
