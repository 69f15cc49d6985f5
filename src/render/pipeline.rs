use rayon::prelude::*;

use crate::encode::png::encode_png;
use crate::encode::sink::LayerSink;
use crate::foundation::core::{Palette, Size};
use crate::foundation::error::{FrescoError, FrescoResult};
use crate::raster::canvas::Canvas;
use crate::scene::catalog::{Catalog, EventVisual};
use crate::scene::layers::{LayerKind, plan_layer};
use crate::scene::plan::execute_plan;
use crate::scene::seeds::EventSeeds;
use crate::scene::stage::Stage;

/// Output resolution and seeding shared by every rendered event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderSettings {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Mixed into every event's seeds. `0` reproduces the stock assets.
    pub base_seed: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: Size::SCENE.width,
            height: Size::SCENE.height,
            base_seed: 0,
        }
    }
}

impl RenderSettings {
    /// Validated canvas size.
    pub fn size(&self) -> FrescoResult<Size> {
        Size::new(self.width, self.height)
    }
}

/// Event-level parallelism.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Render events on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Pool size; `None` lets rayon decide. `Some(0)` is rejected.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// The three PNG-encoded layers of one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLayers {
    /// Event id.
    pub event_id: String,
    /// Encoded layers in [`LayerKind::ALL`] order.
    pub layers: Vec<(LayerKind, Vec<u8>)>,
}

impl EventLayers {
    /// Encoded bytes of one layer.
    pub fn get(&self, kind: LayerKind) -> Option<&[u8]> {
        self.layers
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, b)| b.as_slice())
    }

    /// Hand every layer to `sink` as one event.
    pub fn write_to(&self, sink: &mut dyn LayerSink) -> FrescoResult<()> {
        sink.begin(&self.event_id)?;
        for (kind, png) in &self.layers {
            sink.write_layer(*kind, png)?;
        }
        sink.end()
    }
}

/// Render one layer into `canvas`, which is cleared first and must match `settings`.
#[tracing::instrument(level = "debug", skip(canvas, visual, palette, settings))]
pub fn render_layer_into(
    canvas: &mut Canvas,
    event_id: &str,
    visual: &EventVisual,
    palette: &Palette,
    kind: LayerKind,
    settings: &RenderSettings,
) -> FrescoResult<()> {
    let size = settings.size()?;
    let stage = Stage::new(size);
    let seeds = EventSeeds::derive(event_id, settings.base_seed);
    let plan = plan_layer(kind, visual, palette, &stage, &seeds);
    tracing::debug!(ops = plan.ops.len(), "planned layer");
    canvas.clear();
    execute_plan(canvas, &plan)
}

/// Render one layer of an event into a fresh canvas.
pub fn render_layer(
    event_id: &str,
    visual: &EventVisual,
    palette: &Palette,
    kind: LayerKind,
    settings: &RenderSettings,
) -> FrescoResult<Canvas> {
    let mut canvas = Canvas::with_size(settings.size()?)?;
    render_layer_into(&mut canvas, event_id, visual, palette, kind, settings)?;
    Ok(canvas)
}

/// Render and PNG-encode all three layers of `event_id`.
pub fn render_event(
    catalog: &Catalog,
    event_id: &str,
    settings: &RenderSettings,
) -> FrescoResult<EventLayers> {
    let mut canvas = Canvas::with_size(settings.size()?)?;
    render_event_with(&mut canvas, catalog, event_id, settings)
}

#[tracing::instrument(level = "debug", skip(canvas, catalog, settings))]
fn render_event_with(
    canvas: &mut Canvas,
    catalog: &Catalog,
    event_id: &str,
    settings: &RenderSettings,
) -> FrescoResult<EventLayers> {
    let visual = catalog.get(event_id)?;
    let palette = catalog.palette(visual.profile);
    let mut layers = Vec::with_capacity(LayerKind::ALL.len());
    for kind in LayerKind::ALL {
        render_layer_into(canvas, event_id, visual, &palette, kind, settings)?;
        layers.push((kind, encode_png(canvas)?));
    }
    Ok(EventLayers {
        event_id: event_id.to_owned(),
        layers,
    })
}

/// Render every id in `ids`. Results come back in input order regardless of threading.
///
/// Unknown ids and invalid settings are reported before any rendering starts.
#[tracing::instrument(level = "info", skip_all, fields(events = ids.len(), parallel = threading.parallel))]
pub fn render_events(
    catalog: &Catalog,
    ids: &[String],
    settings: &RenderSettings,
    threading: &RenderThreading,
) -> FrescoResult<Vec<EventLayers>> {
    let size = settings.size()?;
    for id in ids {
        catalog.get(id)?;
    }

    if !threading.parallel {
        let mut canvas = Canvas::with_size(size)?;
        return ids
            .iter()
            .map(|id| render_event_with(&mut canvas, catalog, id, settings))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        ids.par_iter()
            .map_init(
                || Canvas::with_size(size),
                |canvas, id| match canvas {
                    Ok(canvas) => render_event_with(canvas, catalog, id, settings),
                    Err(e) => Err(FrescoError::validation(e.to_string())),
                },
            )
            .collect::<FrescoResult<Vec<_>>>()
    })
}

/// Render `ids` and stream each event into `sink` in input order.
pub fn render_to_sink(
    catalog: &Catalog,
    ids: &[String],
    settings: &RenderSettings,
    threading: &RenderThreading,
    sink: &mut dyn LayerSink,
) -> FrescoResult<Vec<EventLayers>> {
    let events = render_events(catalog, ids, settings, threading)?;
    for event in &events {
        event.write_to(sink)?;
        tracing::info!(event = %event.event_id, "event written");
    }
    Ok(events)
}

fn build_thread_pool(threads: Option<usize>) -> FrescoResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FrescoError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FrescoError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
