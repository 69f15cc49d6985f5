use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::webp::CwebpTranscoder;
use crate::foundation::error::{FrescoError, FrescoResult};
use crate::scene::layers::LayerKind;

/// Consumer of encoded layers, one event at a time.
///
/// Ordering contract: `begin` opens an event, `write_layer` is called once per [`LayerKind`] in
/// render order, then `end` closes the event.
pub trait LayerSink {
    /// Start receiving the layers of `event_id`.
    fn begin(&mut self, event_id: &str) -> FrescoResult<()>;
    /// Store one PNG-encoded layer of the open event.
    fn write_layer(&mut self, kind: LayerKind, png: &[u8]) -> FrescoResult<()>;
    /// Close the open event.
    fn end(&mut self) -> FrescoResult<()>;
}

/// `<root>/<event_id>/<stem>.<ext>`.
pub fn layer_path(root: &Path, event_id: &str, kind: LayerKind, ext: &str) -> PathBuf {
    root.join(event_id).join(format!("{}.{ext}", kind.stem()))
}

/// Whether `event_id` must be rendered: always with `overwrite`, otherwise only when one of its
/// three layer files is missing.
pub fn needs_render(root: &Path, event_id: &str, ext: &str, overwrite: bool) -> bool {
    overwrite
        || LayerKind::ALL
            .iter()
            .any(|k| !layer_path(root, event_id, *k, ext).exists())
}

fn open_event_dir(root: &Path, event_id: &str) -> FrescoResult<PathBuf> {
    let dir = root.join(event_id);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(dir)
}

fn current_dir(dir: &Option<PathBuf>) -> FrescoResult<&Path> {
    dir.as_deref()
        .ok_or_else(|| FrescoError::validation("write_layer called before begin"))
}

/// Writes `<root>/<event>/<stem>.png`.
#[derive(Debug)]
pub struct PngDirSink {
    root: PathBuf,
    dir: Option<PathBuf>,
}

impl PngDirSink {
    /// Sink rooted at `root`. Directories are created on demand.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dir: None,
        }
    }
}

impl LayerSink for PngDirSink {
    fn begin(&mut self, event_id: &str) -> FrescoResult<()> {
        self.dir = Some(open_event_dir(&self.root, event_id)?);
        Ok(())
    }

    fn write_layer(&mut self, kind: LayerKind, png: &[u8]) -> FrescoResult<()> {
        let path = current_dir(&self.dir)?.join(format!("{}.png", kind.stem()));
        std::fs::write(&path, png).with_context(|| format!("write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = png.len(), "wrote layer");
        Ok(())
    }

    fn end(&mut self) -> FrescoResult<()> {
        self.dir = None;
        Ok(())
    }
}

/// Writes `<root>/<event>/<stem>.webp` through a temporary PNG and `cwebp`.
#[derive(Debug)]
pub struct WebpDirSink {
    root: PathBuf,
    transcoder: CwebpTranscoder,
    dir: Option<PathBuf>,
}

impl WebpDirSink {
    /// Sink rooted at `root` using `transcoder` for the lossy step.
    pub fn new(root: impl Into<PathBuf>, transcoder: CwebpTranscoder) -> Self {
        Self {
            root: root.into(),
            transcoder,
            dir: None,
        }
    }
}

impl LayerSink for WebpDirSink {
    fn begin(&mut self, event_id: &str) -> FrescoResult<()> {
        self.dir = Some(open_event_dir(&self.root, event_id)?);
        Ok(())
    }

    fn write_layer(&mut self, kind: LayerKind, png: &[u8]) -> FrescoResult<()> {
        let dir = current_dir(&self.dir)?;
        let out = dir.join(format!("{}.webp", kind.stem()));
        let tmp = TempFileGuard(dir.join(format!("{}.tmp.png", kind.stem())));
        std::fs::write(&tmp.0, png).with_context(|| format!("write '{}'", tmp.0.display()))?;
        self.transcoder.transcode(&tmp.0, &out)
    }

    fn end(&mut self) -> FrescoResult<()> {
        self.dir = None;
        Ok(())
    }
}

/// Removes the file when dropped, whether or not the transcode succeeded.
struct TempFileGuard(PathBuf);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// One event's layers as collected by [`InMemorySink`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectedEvent {
    /// Event id passed to `begin`.
    pub event_id: String,
    /// Layers in arrival order.
    pub layers: Vec<(LayerKind, Vec<u8>)>,
    /// Whether `end` was called for this event.
    pub closed: bool,
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Events in arrival order.
    pub events: Vec<CollectedEvent>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    fn open(&mut self) -> FrescoResult<&mut CollectedEvent> {
        self.events
            .last_mut()
            .filter(|e| !e.closed)
            .ok_or_else(|| FrescoError::validation("no open event in sink"))
    }
}

impl LayerSink for InMemorySink {
    fn begin(&mut self, event_id: &str) -> FrescoResult<()> {
        self.events.push(CollectedEvent {
            event_id: event_id.to_owned(),
            ..CollectedEvent::default()
        });
        Ok(())
    }

    fn write_layer(&mut self, kind: LayerKind, png: &[u8]) -> FrescoResult<()> {
        self.open()?.layers.push((kind, png.to_vec()));
        Ok(())
    }

    fn end(&mut self) -> FrescoResult<()> {
        self.open()?.closed = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
