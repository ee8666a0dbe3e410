use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::encode::sink::{
    FrameSink, SinkConfig, check_frame_order, check_frame_size, check_overwrite,
    ensure_parent_dir,
};
use crate::foundation::math::mul_div255_u16;
use crate::{Fps, FrameKey, FrameRGBA, RippleError, RippleResult, Rgb8};

/// Options for [`FfmpegSink`] video output.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output video file path; the container follows its extension.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Color used to flatten alpha and to pad odd frame sizes to even.
    pub background: Rgb8,
}

impl FfmpegSinkOpts {
    /// Create options for outputting a video to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            background: Rgb8::WHITE,
        }
    }
}

/// Sink that spawns the system `ffmpeg` and streams raw frames to stdin.
///
/// Output is h264/yuv420p. Odd widths or heights are padded by one pixel of background on the
/// right/bottom edge. An audio file from `SinkConfig.audio` is muxed as AAC and cut to the video
/// length.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,

    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_index: Option<u64>,
}

impl FfmpegSink {
    /// Create a new sink that streams into `ffmpeg`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            last_index: None,
        }
    }

    fn command(&self, cfg: &SinkConfig) -> Command {
        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg(if self.opts.overwrite { "-y" } else { "-n" });

        // Input: opaque RGBA8, flattened in push_frame.
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
        ]);
        push_input_fps(&mut cmd, cfg.fps);
        cmd.args(["-i", "pipe:0"]);
        if let Some(audio) = cfg.audio.as_ref() {
            cmd.arg("-i").arg(&audio.path);
        }

        cmd.args(["-vf", &pad_filter(self.opts.background)]);
        cmd.args(["-c:v", "libx264", "-pix_fmt", "yuv420p"]);
        if cfg.audio.is_some() {
            cmd.args([
                "-map", "0:v:0", "-map", "1:a:0", "-c:a", "aac", "-shortest",
            ]);
        } else {
            cmd.arg("-an");
        }
        cmd.args(["-movflags", "+faststart"]);
        cmd.arg(&self.opts.out_path);
        cmd
    }

    fn kill_child(&mut self) {
        drop(self.stdin.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        if let Some(handle) = self.stderr_drain.take() {
            let _ = handle.join();
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> RippleResult<()> {
        Fps::new(cfg.fps.num, cfg.fps.den)?;
        if cfg.width == 0 || cfg.height == 0 {
            return Err(RippleError::encode(
                "ffmpeg sink width/height must be non-zero",
            ));
        }
        if let Some(audio) = cfg.audio.as_ref()
            && !audio.path.is_file()
        {
            return Err(RippleError::encode(format!(
                "audio file '{}' does not exist",
                audio.path.display()
            )));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        check_overwrite(&self.opts.out_path, self.opts.overwrite)?;

        if !is_ffmpeg_on_path() {
            return Err(RippleError::encode(
                "ffmpeg is required for video encoding, but was not found on PATH",
            ));
        }

        let mut child = self.command(&cfg).spawn().map_err(|e| {
            RippleError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| RippleError::encode("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| RippleError::encode("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        tracing::debug!(
            width = cfg.width,
            height = cfg.height,
            fps = cfg.fps.as_f64(),
            audio = cfg.audio.is_some(),
            out = %self.opts.out_path.display(),
            "spawned ffmpeg"
        );
        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_index = None;
        Ok(())
    }

    fn push_frame(&mut self, index: u64, _key: FrameKey, frame: &FrameRGBA) -> RippleResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| RippleError::encode("ffmpeg sink not started"))?;
        check_frame_order(&mut self.last_index, index)?;
        check_frame_size(cfg, frame)?;

        flatten_over_bg_to_opaque_rgba8(
            &mut self.scratch,
            &frame.data,
            frame.premultiplied,
            self.opts.background,
        )?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(RippleError::encode("ffmpeg sink is already finalized"));
        };

        use std::io::Write as _;
        stdin.write_all(&self.scratch).map_err(|e| {
            RippleError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    fn end(&mut self) -> RippleResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| RippleError::encode("ffmpeg sink not started"))?;

        let status = child.wait().map_err(|e| {
            RippleError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| RippleError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| RippleError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(RippleError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        tracing::info!(out = %self.opts.out_path.display(), "video written");
        self.cfg = None;
        Ok(())
    }

    fn abort(&mut self) {
        self.kill_child();
        self.cfg = None;
        if self.opts.out_path.is_file() {
            let _ = std::fs::remove_file(&self.opts.out_path);
        }
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        if self.child.is_some() {
            self.kill_child();
        }
    }
}

fn push_input_fps(cmd: &mut Command, fps: Fps) {
    // For rawvideo input, `-r` before `-i` sets the input framerate.
    cmd.args(["-r", &format!("{}/{}", fps.num, fps.den)]);
}

/// Pad to even dimensions; yuv420p cannot encode odd sizes.
fn pad_filter(bg: Rgb8) -> String {
    format!(
        "pad=ceil(iw/2)*2:ceil(ih/2)*2:0:0:color=0x{:02x}{:02x}{:02x}",
        bg.r, bg.g, bg.b
    )
}

fn flatten_over_bg_to_opaque_rgba8(
    dst: &mut [u8],
    src: &[u8],
    premultiplied: bool,
    bg: Rgb8,
) -> RippleResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(RippleError::encode(
            "flatten_over_bg_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    let bg = [u16::from(bg.r), u16::from(bg.g), u16::from(bg.b)];
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - a;
        for c in 0..3 {
            let fg = if premultiplied {
                u16::from(s[c])
            } else {
                mul_div255_u16(u16::from(s[c]), a)
            };
            d[c] = (fg + mul_div255_u16(bg[c], inv)).min(255) as u8;
        }
        d[3] = 255;
    }

    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
