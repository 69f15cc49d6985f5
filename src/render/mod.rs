//! Event rendering: settings, threading and the plan-to-PNG pipeline.

/// Layer and event rendering on a rayon pool.
pub mod pipeline;
