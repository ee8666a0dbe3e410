use std::path::PathBuf;

use crate::encode::sink::{AudioInputConfig, FrameSink, SinkConfig};
use crate::sweep::controller::{ChunkRenderer, SweepStats, SweepThreading};
use crate::sweep::plan::{SweepPlan, validate_images};
use crate::{Fps, FrameKey, RenderConfig, RippleError, RippleResult, SourceImage};

/// Options for [`render_to_sink`].
#[derive(Clone, Debug, Default)]
pub struct AnimationOpts {
    /// Playback rate; one sweep frame per animation frame.
    pub fps: Fps,
    /// Optional audio track, cut to the animation length by sinks that support audio.
    pub audio: Option<PathBuf>,
    /// Render threading/chunking configuration.
    pub threading: SweepThreading,
}

/// Render a sweep and stream its frames into `sink` in canonical order.
///
/// All images must share the same scaled dimensions. Frames are rendered a chunk at a time, so
/// memory stays bounded by the chunk size. When rendering or encoding fails the sink is aborted
/// and no partial animation is kept.
#[tracing::instrument(level = "info", skip_all, fields(images = images.len(), shape = %config.shape))]
pub fn render_to_sink(
    images: &[SourceImage],
    config: &RenderConfig,
    opts: &AnimationOpts,
    sink: &mut dyn FrameSink,
) -> RippleResult<SweepStats> {
    let plan = SweepPlan::new(config)?;
    let sizes = validate_images(images, config.scale_factor)?;
    let size = sizes[0];
    if let Some((idx, other)) = sizes.iter().enumerate().find(|(_, s)| **s != size) {
        return Err(RippleError::config(format!(
            "all frames of an animation must share one size: image 0 is {}x{}, image {idx} is {}x{}",
            size.width, size.height, other.width, other.height
        )));
    }
    let fps = Fps::new(opts.fps.num, opts.fps.den)?;
    let renderer = ChunkRenderer::new(images, config, &opts.threading)?;

    let jobs: Vec<FrameKey> = plan.jobs(images.len()).collect();
    tracing::info!(
        images = images.len(),
        steps = plan.len(),
        frames = jobs.len(),
        width = size.width,
        height = size.height,
        fps = fps.as_f64(),
        duration_secs = fps.frames_to_secs(jobs.len() as u64),
        "starting animation"
    );

    sink.begin(SinkConfig {
        width: size.width,
        height: size.height,
        fps,
        audio: opts
            .audio
            .clone()
            .map(|path| AudioInputConfig { path }),
    })?;

    let mut pushed = 0u64;
    for chunk in jobs.chunks(renderer.chunk_size) {
        let step = renderer.render(chunk).and_then(|frames| {
            for (key, frame) in chunk.iter().zip(frames.iter()) {
                sink.push_frame(pushed, *key, frame)?;
                pushed += 1;
            }
            Ok(())
        });
        if let Err(e) = step {
            tracing::warn!(error = %e, frames_pushed = pushed, "animation aborted");
            sink.abort();
            return Err(e);
        }
    }
    if let Err(e) = sink.end() {
        sink.abort();
        return Err(e);
    }

    Ok(SweepStats {
        images: images.len() as u64,
        steps_per_image: plan.len() as u64,
        frames_total: pushed,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sweep/stream.rs"]
mod tests;
