use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::{FrescoError, FrescoResult};

/// Owned, row-major RGBA8 pixel buffer.
///
/// The buffer length is always `width * height * 4`. Pixels are straight (not premultiplied)
/// RGBA, top-to-bottom, left-to-right. A fresh canvas is fully transparent black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a zero-filled canvas.
    pub fn new(width: u32, height: u32) -> FrescoResult<Self> {
        Self::with_size(Size::new(width, height)?)
    }

    /// Allocate a zero-filled canvas of `size`.
    pub fn with_size(size: Size) -> FrescoResult<Self> {
        let len = size.byte_len()?;
        Ok(Self {
            width: size.width,
            height: size.height,
            data: vec![0u8; len],
        })
    }

    /// Wrap an existing RGBA8 buffer. The length must match `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> FrescoResult<Self> {
        let len = Size::new(width, height)?.byte_len()?;
        if data.len() != len {
            return Err(FrescoError::validation(format!(
                "rgba8 buffer has {} bytes, expected {len} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Borrow the raw RGBA8 bytes.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.data
    }

    /// Consume the canvas and return its RGBA8 bytes.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.data
    }

    /// Reset every byte to zero (transparent black).
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Read one pixel. Out-of-bounds coordinates return `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let i = self.index(i64::from(x), i64::from(y))?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Overwrite one pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        if let Some(i) = self.index(i64::from(x), i64::from(y)) {
            self.data[i..i + 4].copy_from_slice(&px);
        }
    }

    /// Mutable view of one row of RGBA8 bytes.
    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Iterate rows of RGBA8 bytes, top to bottom.
    pub(crate) fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.stride())
    }

    /// Mutable pixel at signed coordinates, `None` outside the canvas.
    pub(crate) fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut [u8]> {
        let i = self.index(x, y)?;
        Some(&mut self.data[i..i + 4])
    }

    fn stride(&self) -> usize {
        self.width as usize * 4
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
