//! Lossless PNG container, the external WebP transcoder and layer sinks.

/// PNG encoder and strict decoder.
pub mod png;
/// Destinations for encoded layers.
pub mod sink;
/// `cwebp` discovery and invocation.
pub mod webp;
