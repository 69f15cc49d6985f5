use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::foundation::error::{FrescoError, FrescoResult};

/// Environment variable naming an explicit `cwebp` binary.
pub const CWEBP_ENV: &str = "CWEBP";

const CWEBP_CANDIDATES: [&str; 2] = ["/opt/homebrew/bin/cwebp", "/usr/local/bin/cwebp"];

/// Quality settings passed to `cwebp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CwebpOpts {
    /// Lossy color quality (`-q`), `0..=100`.
    pub quality: u8,
    /// Alpha plane quality (`-alpha_q`), `0..=100`.
    pub alpha_quality: u8,
}

impl Default for CwebpOpts {
    fn default() -> Self {
        Self {
            quality: 87,
            alpha_quality: 92,
        }
    }
}

/// Lossy re-encoder that shells out to the system `cwebp` binary.
#[derive(Clone, Debug)]
pub struct CwebpTranscoder {
    bin: PathBuf,
    opts: CwebpOpts,
}

impl CwebpTranscoder {
    /// Transcoder for `bin` with default quality.
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            opts: CwebpOpts::default(),
        }
    }

    /// Replace the quality settings.
    pub fn with_opts(self, opts: CwebpOpts) -> Self {
        Self { opts, ..self }
    }

    /// Path of the binary this transcoder runs.
    pub fn bin(&self) -> &Path {
        &self.bin
    }

    /// Command-line arguments for converting `png_path` into `out_path`.
    pub fn args(&self, png_path: &Path, out_path: &Path) -> Vec<OsString> {
        vec![
            "-q".into(),
            self.opts.quality.to_string().into(),
            "-alpha_q".into(),
            self.opts.alpha_quality.to_string().into(),
            png_path.as_os_str().to_owned(),
            "-o".into(),
            out_path.as_os_str().to_owned(),
        ]
    }

    /// Check that the binary runs (`cwebp -version`).
    pub fn probe(&self) -> FrescoResult<()> {
        let status = Command::new(&self.bin)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                FrescoError::transcode(format!(
                    "unable to execute cwebp via {}: {e}",
                    self.bin.display()
                ))
            })?;
        if !status.success() {
            return Err(FrescoError::transcode(format!(
                "unable to execute cwebp via {}: exited with {status}",
                self.bin.display()
            )));
        }
        Ok(())
    }

    /// Convert one PNG file to WebP.
    pub fn transcode(&self, png_path: &Path, out_path: &Path) -> FrescoResult<()> {
        let output = Command::new(&self.bin)
            .args(self.args(png_path, out_path))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                FrescoError::transcode(format!(
                    "failed to spawn cwebp (is it installed?): {e}"
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FrescoError::transcode(format!(
                "cwebp exited with status {} for '{}': {}",
                output.status,
                png_path.display(),
                stderr.trim()
            )));
        }
        tracing::debug!(out = %out_path.display(), "transcoded webp");
        Ok(())
    }
}

/// Locate `cwebp`: an explicit path, then `$CWEBP` if it exists, then common install
/// locations, then plain `cwebp` resolved through `PATH`.
pub fn find_cwebp(explicit: Option<&Path>) -> PathBuf {
    let env = std::env::var_os(CWEBP_ENV).map(PathBuf::from);
    let candidates: Vec<&Path> = CWEBP_CANDIDATES.iter().map(Path::new).collect();
    pick_cwebp(explicit, env.as_deref(), &candidates)
}

fn pick_cwebp(explicit: Option<&Path>, env: Option<&Path>, candidates: &[&Path]) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    if let Some(p) = env.filter(|p| !p.as_os_str().is_empty() && p.exists()) {
        return p.to_path_buf();
    }
    candidates
        .iter()
        .find(|p| p.exists())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("cwebp"))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/webp.rs"]
mod tests;
