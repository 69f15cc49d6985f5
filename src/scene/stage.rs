use crate::foundation::core::{Point, Rect, Size, Vec2};

/// Maps the 1600x900 authoring space of the scene scripts onto a target canvas size.
///
/// At the reference size every mapping is the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stage {
    size: Size,
    sx: f64,
    sy: f64,
}

impl Stage {
    /// Width of the authoring space.
    pub const REF_W: f64 = 1600.0;
    /// Height of the authoring space.
    pub const REF_H: f64 = 900.0;

    /// Stage for a canvas of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            sx: f64::from(size.width) / Self::REF_W,
            sy: f64::from(size.height) / Self::REF_H,
        }
    }

    /// Target canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Map a reference-space point.
    pub fn pt(&self, x: f64, y: f64) -> Point {
        Point::new(x * self.sx, y * self.sy)
    }

    /// Map reference-space radii.
    pub fn radii(&self, rx: f64, ry: f64) -> Vec2 {
        Vec2::new(rx * self.sx, ry * self.sy)
    }

    /// Map a reference-space rectangle.
    pub fn rect(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::new(x0 * self.sx, y0 * self.sy, x1 * self.sx, y1 * self.sy)
    }

    /// Map an isotropic length (stroke thickness, feather in pixels).
    pub fn len(&self, v: f64) -> f64 {
        if self.sx == self.sy {
            v * self.sx
        } else {
            v * (self.sx * self.sy).sqrt()
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(Size::SCENE)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/stage.rs"]
mod tests;
