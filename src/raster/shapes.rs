use crate::foundation::core::{Point, Rect, Rgb8, Vec2};
use crate::foundation::math::scale_coverage;
use crate::raster::canvas::Canvas;
use crate::raster::composite::blend;

/// Solid color plus peak coverage for a soft shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Paint {
    /// Fill color.
    pub color: Rgb8,
    /// Coverage inside the shape body, `0..=255`.
    pub alpha: u8,
}

impl Paint {
    /// Build a paint from a color and peak coverage.
    pub const fn new(color: Rgb8, alpha: u8) -> Self {
        Self { color, alpha }
    }
}

/// Ellipse with a feathered rim.
///
/// `feather` is a fraction of the normalized squared distance: the rim fades linearly from full
/// coverage at `d = 1` to nothing at `d = 1 + feather`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SoftEllipse {
    /// Center in canvas space.
    pub center: Point,
    /// Horizontal and vertical radii.
    pub radii: Vec2,
    /// Rim width as a fraction of the normalized distance.
    pub feather: f64,
}

impl SoftEllipse {
    /// Feather used when none is given.
    pub const DEFAULT_FEATHER: f64 = 0.24;

    /// Ellipse with the default feather.
    pub fn new(center: Point, radii: Vec2) -> Self {
        Self {
            center,
            radii,
            feather: Self::DEFAULT_FEATHER,
        }
    }

    /// Replace the feather.
    pub fn with_feather(self, feather: f64) -> Self {
        Self { feather, ..self }
    }

    /// Rasterize onto `canvas`. Degenerate radii draw nothing.
    pub fn draw(&self, canvas: &mut Canvas, paint: Paint) {
        let (rx, ry) = (self.radii.x, self.radii.y);
        if !(rx > 0.0 && ry > 0.0) || !self.center.x.is_finite() || !self.center.y.is_finite() {
            return;
        }
        let feather = self.feather.max(0.0);
        let reach = 1.0 + feather;
        let (cx, cy) = (self.center.x, self.center.y);

        let Some(bounds) = PixelBounds::clipped(
            canvas,
            cx - rx * reach,
            cy - ry * reach,
            cx + rx * reach,
            cy + ry * reach,
        ) else {
            return;
        };

        for y in bounds.y0..=bounds.y1 {
            let ny = (y as f64 - cy) / ry;
            for x in bounds.x0..=bounds.x1 {
                let nx = (x as f64 - cx) / rx;
                let d = nx * nx + ny * ny;
                if d > reach {
                    continue;
                }
                let coverage = if d <= 1.0 {
                    paint.alpha
                } else {
                    let t = (d - 1.0) / feather;
                    scale_coverage(paint.alpha, (1.0 - t).max(0.0))
                };
                blend(canvas, x, y, paint.color, coverage);
            }
        }
    }
}

/// Axis-aligned rectangle whose edges fade out over `feather` pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SoftRect {
    /// Solid body in canvas space.
    pub rect: Rect,
    /// Fade distance in pixels outside the body.
    pub feather: f64,
}

impl SoftRect {
    /// Feather used when none is given.
    pub const DEFAULT_FEATHER: f64 = 10.0;

    /// Rectangle with the default feather.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            feather: Self::DEFAULT_FEATHER,
        }
    }

    /// Replace the feather.
    pub fn with_feather(self, feather: f64) -> Self {
        Self { feather, ..self }
    }

    /// Rasterize onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas, paint: Paint) {
        let r = self.rect.abs();
        let feather = self.feather.max(0.0);
        let Some(bounds) = PixelBounds::clipped(
            canvas,
            r.x0 - feather,
            r.y0 - feather,
            r.x1 + feather,
            r.y1 + feather,
        ) else {
            return;
        };
        let denom = feather.max(1.0);

        for y in bounds.y0..=bounds.y1 {
            let py = y as f64;
            let dy = (r.y0 - py).max(0.0).max(py - r.y1);
            for x in bounds.x0..=bounds.x1 {
                let px = x as f64;
                let dx = (r.x0 - px).max(0.0).max(px - r.x1);
                let d = dx.max(dy);
                if d > feather {
                    continue;
                }
                let coverage = scale_coverage(paint.alpha, 1.0 - d / denom);
                blend(canvas, x, y, paint.color, coverage);
            }
        }
    }
}

/// Thick segment approximated by soft ellipses stamped every ~3 pixels.
///
/// The coverage is the union of overlapping stamps, not a true capsule: interior pixels that
/// sit under several stamps are blended several times.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SoftLine {
    /// Segment start.
    pub from: Point,
    /// Segment end.
    pub to: Point,
    /// Horizontal stamp radius; the vertical radius is `0.75 * thickness`.
    pub thickness: f64,
}

impl SoftLine {
    /// Feather of each stamped ellipse.
    pub const STAMP_FEATHER: f64 = 0.32;
    /// Pixels along the longer axis per stamp.
    pub const STAMP_SPACING: f64 = 3.0;

    /// Build a line.
    pub fn new(from: Point, to: Point, thickness: f64) -> Self {
        Self {
            from,
            to,
            thickness,
        }
    }

    /// Number of intervals between stamps; `steps + 1` stamps are drawn.
    pub fn steps(&self) -> u64 {
        let span = (self.to.x - self.from.x)
            .abs()
            .max((self.to.y - self.from.y).abs());
        if !span.is_finite() {
            return 1;
        }
        (span / Self::STAMP_SPACING) as u64 + 1
    }

    /// Rasterize onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas, paint: Paint) {
        let steps = self.steps();
        let radii = Vec2::new(self.thickness, self.thickness * 0.75);
        for i in 0..=steps {
            let t = i as f64 / steps.max(1) as f64;
            let center = Point::new(
                self.from.x * (1.0 - t) + self.to.x * t,
                self.from.y * (1.0 - t) + self.to.y * t,
            );
            SoftEllipse::new(center, radii)
                .with_feather(Self::STAMP_FEATHER)
                .draw(canvas, paint);
        }
    }
}

/// Inclusive pixel box, clipped to the canvas.
struct PixelBounds {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl PixelBounds {
    /// Truncate float bounds toward zero and clip; `None` when nothing is left.
    fn clipped(canvas: &Canvas, x0: f64, y0: f64, x1: f64, y1: f64) -> Option<Self> {
        let b = Self {
            x0: (x0 as i64).max(0),
            y0: (y0 as i64).max(0),
            x1: (x1 as i64).min(i64::from(canvas.width()) - 1),
            y1: (y1 as i64).min(i64::from(canvas.height()) - 1),
        };
        (b.x0 <= b.x1 && b.y0 <= b.y1).then_some(b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
