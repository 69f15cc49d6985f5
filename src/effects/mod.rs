//! Full-canvas passes: gradient, glow, grain, vignette and noise-driven scatter.

/// Gradient, glow, grain and vignette passes.
pub mod field;
/// Ember haze and speckle scatter.
pub mod scatter;
