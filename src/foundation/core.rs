use crate::foundation::error::{FrescoError, FrescoResult};

pub use kurbo::{Point, Rect, Vec2};

/// Straight RGBA8 pixel as stored in a [`Canvas`](crate::Canvas).
pub type Rgba8 = [u8; 4];

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array in `r, g, b` order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Rec. 601 luma, used for ordering colors by brightness.
    pub fn luma(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        c.channels()
    }
}

/// Four-color palette driving the gradient, glow and shadow passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Gradient color at the first row.
    pub top: Rgb8,
    /// Gradient color at the last row.
    pub bottom: Rgb8,
    /// Glow and accent color.
    pub highlight: Rgb8,
    /// Structure color.
    pub shadow: Rgb8,
}

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Production resolution of generated scene layers.
    pub const SCENE: Size = Size {
        width: 1600,
        height: 900,
    };

    /// Create validated dimensions: both non-zero and addressable as RGBA8.
    pub fn new(width: u32, height: u32) -> FrescoResult<Self> {
        let size = Self { width, height };
        size.byte_len()?;
        Ok(size)
    }

    /// Length in bytes of an RGBA8 buffer of this size.
    pub fn byte_len(self) -> FrescoResult<usize> {
        if self.width == 0 || self.height == 0 {
            return Err(FrescoError::validation(format!(
                "canvas size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| FrescoError::validation("canvas buffer size overflow"))
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::SCENE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
