use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::encode::sink::{
    FrameSink, SinkConfig, check_frame_order, check_frame_size, check_overwrite,
    ensure_parent_dir, reject_audio,
};
use crate::{Fps, FrameKey, FrameRGBA, RippleError, RippleResult};

/// Options for [`GifSink`].
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output `.gif` path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Loop forever when `true`, play once otherwise.
    pub repeat: bool,
}

impl GifSinkOpts {
    /// Options for a looping GIF at `out_path`, replacing any existing file.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            repeat: true,
        }
    }
}

/// Animated GIF sink; every frame is shown for `1 / fps` seconds.
///
/// GIF has no audio track; a config carrying audio is rejected in `begin`.
pub struct GifSink {
    opts: GifSinkOpts,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    delay: Delay,
    last_index: Option<u64>,
    frames_written: u64,
}

impl GifSink {
    /// Create a sink; nothing is written until `begin`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            delay: Delay::from_numer_denom_ms(100, 1),
            last_index: None,
            frames_written: 0,
        }
    }
}

/// Per-frame display time for `fps`.
pub(crate) fn frame_delay(fps: Fps) -> Delay {
    Delay::from_numer_denom_ms(fps.den.saturating_mul(1000), fps.num)
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> RippleResult<()> {
        let fps = Fps::new(cfg.fps.num, cfg.fps.den)?;
        if cfg.width == 0 || cfg.height == 0 {
            return Err(RippleError::encode("gif sink width/height must be non-zero"));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(RippleError::encode(format!(
                "gif frames are limited to 65535x65535, got {}x{}",
                cfg.width, cfg.height
            )));
        }
        reject_audio(&cfg, "gif")?;

        ensure_parent_dir(&self.opts.out_path)?;
        check_overwrite(&self.opts.out_path, self.opts.overwrite)?;

        use anyhow::Context as _;
        let file = File::create(&self.opts.out_path)
            .with_context(|| format!("create gif '{}'", self.opts.out_path.display()))?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        let repeat = if self.opts.repeat {
            Repeat::Infinite
        } else {
            Repeat::Finite(0)
        };
        encoder
            .set_repeat(repeat)
            .map_err(|e| RippleError::encode(format!("gif repeat setup failed: {e}")))?;

        self.delay = frame_delay(fps);
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_index = None;
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, index: u64, _key: FrameKey, frame: &FrameRGBA) -> RippleResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| RippleError::encode("gif sink not started"))?;
        check_frame_order(&mut self.last_index, index)?;
        check_frame_size(cfg, frame)?;

        let rgba = frame
            .to_rgba_image()
            .ok_or_else(|| RippleError::encode("frame buffer does not match its dimensions"))?;
        let Some(encoder) = self.encoder.as_mut() else {
            return Err(RippleError::encode("gif sink is already finalized"));
        };
        encoder
            .encode_frame(Frame::from_parts(rgba, 0, 0, self.delay))
            .map_err(|e| RippleError::encode(format!("gif frame {index} failed: {e}")))?;
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> RippleResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| RippleError::encode("gif sink not started"))?;
        // Dropping the encoder writes the trailer.
        drop(encoder);
        tracing::info!(
            out = %self.opts.out_path.display(),
            frames = self.frames_written,
            "gif written"
        );
        self.cfg = None;
        Ok(())
    }

    fn abort(&mut self) {
        drop(self.encoder.take());
        self.cfg = None;
        if self.opts.out_path.is_file() {
            let _ = std::fs::remove_file(&self.opts.out_path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
