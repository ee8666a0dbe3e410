use std::path::{Path, PathBuf};

use crate::encode::sink::{
    FrameSink, SinkConfig, check_frame_order, check_frame_size, reject_audio,
};
use crate::{FrameKey, FrameRGBA, RippleError, RippleResult};

/// Options for [`PngSequenceSink`].
#[derive(Clone, Debug)]
pub struct PngSequenceOpts {
    /// Output directory; created when missing.
    pub dir: PathBuf,
    /// Overwrite existing frame files.
    pub overwrite: bool,
}

impl PngSequenceOpts {
    /// Options for frames written into `dir`, replacing existing files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: true,
        }
    }
}

/// Writes every frame to `<dir>/frame_NNNN.png`, numbered by push index. Audio is rejected.
pub struct PngSequenceSink {
    opts: PngSequenceOpts,
    cfg: Option<SinkConfig>,
    last_index: Option<u64>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Create a sink; the directory is created in `begin`.
    pub fn new(opts: PngSequenceOpts) -> Self {
        Self {
            opts,
            cfg: None,
            last_index: None,
            written: Vec::new(),
        }
    }

    /// Paths written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

pub(crate) fn frame_file_name(index: u64) -> String {
    format!("frame_{index:04}.png")
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> RippleResult<()> {
        reject_audio(&cfg, "png sequence")?;
        use anyhow::Context as _;
        std::fs::create_dir_all(&self.opts.dir).with_context(|| {
            format!("failed to create output directory '{}'", self.opts.dir.display())
        })?;
        self.cfg = Some(cfg);
        self.last_index = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, index: u64, _key: FrameKey, frame: &FrameRGBA) -> RippleResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| RippleError::encode("png sequence sink not started"))?;
        check_frame_order(&mut self.last_index, index)?;
        check_frame_size(cfg, frame)?;

        let path = self.opts.dir.join(frame_file_name(index));
        write_png(&path, frame, self.opts.overwrite)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> RippleResult<()> {
        if self.cfg.take().is_none() {
            return Err(RippleError::encode("png sequence sink not started"));
        }
        tracing::info!(
            dir = %self.opts.dir.display(),
            frames = self.written.len(),
            "png sequence written"
        );
        Ok(())
    }

    fn abort(&mut self) {
        self.cfg = None;
        for path in self.written.drain(..) {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Save one frame as a PNG file.
pub fn write_png(path: &Path, frame: &FrameRGBA, overwrite: bool) -> RippleResult<()> {
    crate::encode::sink::check_overwrite(path, overwrite)?;
    crate::encode::sink::ensure_parent_dir(path)?;
    let rgba = frame
        .to_rgba_image()
        .ok_or_else(|| RippleError::encode("frame buffer does not match its dimensions"))?;
    rgba.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| RippleError::encode(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png_seq.rs"]
mod tests;
