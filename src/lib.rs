//! Fresco generates layered, parallax-ready scene art for a historical timeline.
//!
//! Every event gets three deterministic RGBA layers (background, midground, foreground) built from
//! a small raster toolkit: a straight-alpha canvas, an integer source-over compositor, a seeded
//! hash noise, feathered shapes and full-canvas passes. Layers are encoded as PNG and optionally
//! re-encoded as WebP through the system `cwebp` binary.
//!
//! - Describe events with a [`Catalog`]
//! - Render them with [`render_events`]
//! - Store the results through a [`LayerSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Full-canvas passes.
pub mod effects;
/// Lossless container, lossy transcoder and sinks.
pub mod encode;
/// Raster primitives.
pub mod raster;
/// Rendering pipeline.
pub mod render;
/// Event catalog and scene scripts.
pub mod scene;

pub use crate::foundation::core::{Palette, Point, Rect, Rgb8, Rgba8, Size, Vec2};
pub use crate::foundation::error::{FrescoError, FrescoResult};

pub use crate::encode::png::{decode_png, encode_png};
pub use crate::encode::sink::{InMemorySink, LayerSink, PngDirSink, WebpDirSink, needs_render};
pub use crate::encode::webp::{CwebpTranscoder, find_cwebp};
pub use crate::raster::canvas::Canvas;
pub use crate::render::pipeline::{
    EventLayers, RenderSettings, RenderThreading, render_event, render_events, render_layer,
    render_to_sink,
};
pub use crate::scene::catalog::{Accent, Catalog, EventVisual, Motif, Profile};
pub use crate::scene::layers::LayerKind;
pub use crate::scene::plan::{DrawOp, LayerPlan, execute_plan};
