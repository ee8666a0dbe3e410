use std::path::{Path, PathBuf};

use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::gif::{GifSink, GifSinkOpts};
use crate::encode::png_seq::{PngSequenceOpts, PngSequenceSink};
use crate::{Fps, FrameKey, FrameRGBA, RippleResult};

/// Configuration provided to a [`FrameSink`] at the start of an animation.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Optional external audio track.
    pub audio: Option<AudioInputConfig>,
}

/// Audio track for sinks that can mux audio.
#[derive(Debug, Clone)]
pub struct AudioInputConfig {
    /// Any audio file `ffmpeg` can decode. The track is cut to the video length.
    pub path: PathBuf,
}

/// Sink contract for consuming frames in sweep order.
///
/// Ordering contract: `push_frame` is called with strictly increasing `index`, starting at 0.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> RippleResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, index: u64, key: FrameKey, frame: &FrameRGBA) -> RippleResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> RippleResult<()>;
    /// Called instead of `end` when the animation fails part way; discards partial output.
    fn abort(&mut self) {}
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameKey, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameKey, FrameRGBA)] {
        &self.frames
    }

    /// `true` once `end` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> RippleResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, _index: u64, key: FrameKey, frame: &FrameRGBA) -> RippleResult<()> {
        self.frames.push((key, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> RippleResult<()> {
        self.finished = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.frames.clear();
    }
}

/// Pick a sink from the output path's extension.
///
/// `.gif` writes an animated GIF, `.mp4`/`.mov`/`.mkv` go through `ffmpeg`, anything else
/// is treated as a directory of numbered PNG frames.
pub fn sink_for_path(path: impl AsRef<Path>, overwrite: bool) -> Box<dyn FrameSink> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("gif") => Box::new(GifSink::new(GifSinkOpts {
            overwrite,
            ..GifSinkOpts::new(path)
        })),
        Some("mp4" | "mov" | "mkv") => Box::new(FfmpegSink::new(FfmpegSinkOpts {
            overwrite,
            ..FfmpegSinkOpts::new(path)
        })),
        _ => Box::new(PngSequenceSink::new(PngSequenceOpts {
            overwrite,
            ..PngSequenceOpts::new(path)
        })),
    }
}

/// Reject frames that do not match the size announced in `begin`.
pub(crate) fn check_frame_size(cfg: &SinkConfig, frame: &FrameRGBA) -> RippleResult<()> {
    if frame.width != cfg.width || frame.height != cfg.height {
        return Err(crate::RippleError::encode(format!(
            "frame size mismatch: got {}x{}, expected {}x{}",
            frame.width, frame.height, cfg.width, cfg.height
        )));
    }
    let expected = (cfg.width as usize) * (cfg.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(crate::RippleError::encode(
            "frame.data size mismatch with width*height*4",
        ));
    }
    Ok(())
}

/// Enforce strictly increasing frame indices.
pub(crate) fn check_frame_order(last: &mut Option<u64>, index: u64) -> RippleResult<()> {
    if let Some(prev) = *last
        && index <= prev
    {
        return Err(crate::RippleError::encode(format!(
            "sink received out-of-order frame index {index} after {prev}"
        )));
    }
    *last = Some(index);
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> RippleResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Fail for outputs that cannot carry the configured audio track.
pub(crate) fn reject_audio(cfg: &SinkConfig, output: &str) -> RippleResult<()> {
    match cfg.audio.as_ref() {
        Some(audio) => Err(crate::RippleError::config(format!(
            "{output} output has no audio track; write a video (.mp4/.mov/.mkv) to keep '{}'",
            audio.path.display()
        ))),
        None => Ok(()),
    }
}

/// Fail when `path` exists and overwriting is disabled.
pub(crate) fn check_overwrite(path: &Path, overwrite: bool) -> RippleResult<()> {
    if !overwrite && path.exists() {
        return Err(crate::RippleError::encode(format!(
            "output '{}' already exists",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
