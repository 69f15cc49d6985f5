//! Canvas, compositor, noise and soft-shape rasterization.

/// Owned RGBA8 canvas.
pub mod canvas;
/// Source-over blending of single pixels.
pub mod composite;
/// Seeded hash noise.
pub mod noise;
/// Feathered ellipse, rectangle and line primitives.
pub mod shapes;
