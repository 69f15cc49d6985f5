//! Event catalog and the scene scripts that turn an event into layer plans.

/// Event ids, style tags and palettes.
pub mod catalog;
/// Per-event layer scripts.
pub mod layers;
/// Draw-op lists and their executor.
pub mod plan;
/// Stable per-event seeds.
pub mod seeds;
/// Reference-space to canvas-space mapping.
pub mod stage;
