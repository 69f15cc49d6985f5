use crate::effects::field::{GlowParams, VignetteParams, add_glow, add_grain, add_vignette, fill_gradient};
use crate::effects::scatter::{EmberHazeParams, SpeckleParams, ember_haze, scatter_specks};
use crate::foundation::core::{Point, Rgb8, Size};
use crate::foundation::error::{FrescoError, FrescoResult};
use crate::raster::canvas::Canvas;
use crate::raster::composite::blend;
use crate::raster::shapes::{Paint, SoftEllipse, SoftLine, SoftRect};

/// One drawing call of a layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Opaque vertical gradient base fill.
    Gradient {
        /// First row color.
        top: Rgb8,
        /// Last row color.
        bottom: Rgb8,
    },
    /// Additive glow.
    Glow(GlowParams),
    /// Seeded film grain.
    Grain {
        /// Peak-to-peak channel offset.
        amount: f64,
        /// Noise seed.
        seed: i64,
    },
    /// Edge darkening.
    Vignette(VignetteParams),
    /// Rippled ember band.
    EmberHaze(EmberHazeParams),
    /// Noise-thresholded specks.
    Specks(SpeckleParams),
    /// Soft ellipse.
    Ellipse {
        /// Geometry.
        shape: SoftEllipse,
        /// Color and coverage.
        paint: Paint,
    },
    /// Soft rectangle.
    Rect {
        /// Geometry.
        shape: SoftRect,
        /// Color and coverage.
        paint: Paint,
    },
    /// Stamped soft line.
    Line {
        /// Geometry.
        shape: SoftLine,
        /// Color and coverage.
        paint: Paint,
    },
    /// Single blended pixel at the truncated position.
    Dot {
        /// Position in canvas space.
        at: Point,
        /// Color and coverage.
        paint: Paint,
    },
}

/// Ordered drawing calls for one canvas. Later ops layer over earlier ones.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerPlan {
    /// Canvas size the ops are laid out for.
    pub size: Size,
    /// Ops in execution order.
    pub ops: Vec<DrawOp>,
}

impl LayerPlan {
    /// Empty plan for a canvas of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Append an op.
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

/// Run every op of `plan` against `canvas`, in order.
pub fn execute_plan(canvas: &mut Canvas, plan: &LayerPlan) -> FrescoResult<()> {
    if canvas.size() != plan.size {
        return Err(FrescoError::validation(format!(
            "plan laid out for {}x{} but canvas is {}x{}",
            plan.size.width,
            plan.size.height,
            canvas.width(),
            canvas.height()
        )));
    }

    for op in &plan.ops {
        match op {
            DrawOp::Gradient { top, bottom } => fill_gradient(canvas, *top, *bottom),
            DrawOp::Glow(p) => add_glow(canvas, p),
            DrawOp::Grain { amount, seed } => add_grain(canvas, *amount, *seed),
            DrawOp::Vignette(p) => add_vignette(canvas, p),
            DrawOp::EmberHaze(p) => ember_haze(canvas, p),
            DrawOp::Specks(p) => scatter_specks(canvas, p),
            DrawOp::Ellipse { shape, paint } => shape.draw(canvas, *paint),
            DrawOp::Rect { shape, paint } => shape.draw(canvas, *paint),
            DrawOp::Line { shape, paint } => shape.draw(canvas, *paint),
            DrawOp::Dot { at, paint } => {
                blend(canvas, at.x as i64, at.y as i64, paint.color, paint.alpha)
            }
        }
    }
    Ok(())
}

/// Allocate a canvas of the plan's size and run the plan on it.
pub fn rasterize(plan: &LayerPlan) -> FrescoResult<Canvas> {
    let mut canvas = Canvas::with_size(plan.size)?;
    execute_plan(&mut canvas, plan)?;
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/plan.rs"]
mod tests;
