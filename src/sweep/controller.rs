use rayon::prelude::*;

use crate::render::pipeline::render_frame_for;
use crate::sweep::plan::{SweepPlan, validate_images};
use crate::{FrameKey, FrameRGBA, RenderConfig, RippleError, RippleResult, SourceImage};

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame sweeps.
pub struct SweepThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for SweepThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

impl SweepThreading {
    /// Parallel rendering with the default chunk size and pool size.
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated sweep counters.
pub struct SweepStats {
    /// Number of source images swept.
    pub images: u64,
    /// Frames produced per image.
    pub steps_per_image: u64,
    /// Total frames produced.
    pub frames_total: u64,
}

/// Frames of a sweep in canonical order, each tagged with the image and step it came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<(FrameKey, FrameRGBA)>,
}

impl FrameSequence {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            frames: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, key: FrameKey, frame: FrameRGBA) {
        self.frames.push((key, frame));
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when the sequence holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index` in canonical order.
    pub fn get(&self, index: usize) -> Option<&(FrameKey, FrameRGBA)> {
        self.frames.get(index)
    }

    /// Iterate frames with their keys in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, (FrameKey, FrameRGBA)> {
        self.frames.iter()
    }

    /// Keys in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = FrameKey> + '_ {
        self.frames.iter().map(|(k, _)| *k)
    }

    /// Frames in canonical order, without keys.
    pub fn frames(&self) -> impl Iterator<Item = &FrameRGBA> + '_ {
        self.frames.iter().map(|(_, f)| f)
    }

    /// Unwrap into the owned `(key, frame)` list.
    pub fn into_frames(self) -> Vec<(FrameKey, FrameRGBA)> {
        self.frames
    }
}

impl IntoIterator for FrameSequence {
    type Item = (FrameKey, FrameRGBA);
    type IntoIter = std::vec::IntoIter<(FrameKey, FrameRGBA)>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a (FrameKey, FrameRGBA);
    type IntoIter = std::slice::Iter<'a, (FrameKey, FrameRGBA)>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Render every image at every step of the sweep, sequentially.
///
/// Frames come back image-major: all steps of image 0 ascending, then image 1, and so on.
pub fn run_sweep(images: &[SourceImage], config: &RenderConfig) -> RippleResult<FrameSequence> {
    run_sweep_with(images, config, &SweepThreading::default()).map(|(frames, _)| frames)
}

/// Render a sweep with explicit threading and return both frames and counters.
///
/// Parallel runs produce the same sequence as sequential ones.
#[tracing::instrument(level = "info", skip_all, fields(images = images.len(), shape = %config.shape))]
pub fn run_sweep_with(
    images: &[SourceImage],
    config: &RenderConfig,
    threading: &SweepThreading,
) -> RippleResult<(FrameSequence, SweepStats)> {
    let plan = SweepPlan::new(config)?;
    validate_images(images, config.scale_factor)?;

    let jobs: Vec<FrameKey> = plan.jobs(images.len()).collect();
    tracing::info!(
        images = images.len(),
        steps = plan.len(),
        frames = jobs.len(),
        parallel = threading.parallel,
        "starting sweep"
    );

    let mut out = FrameSequence::with_capacity(jobs.len());
    let renderer = ChunkRenderer::new(images, config, threading)?;
    for chunk in jobs.chunks(renderer.chunk_size) {
        let frames = renderer.render(chunk)?;
        for (key, frame) in chunk.iter().zip(frames) {
            out.push(*key, frame);
        }
    }

    let stats = SweepStats {
        images: images.len() as u64,
        steps_per_image: plan.len() as u64,
        frames_total: out.len() as u64,
    };
    Ok((out, stats))
}

/// Renders batches of frame jobs, on a rayon pool when threading asks for it.
pub(crate) struct ChunkRenderer<'a> {
    images: &'a [SourceImage],
    config: &'a RenderConfig,
    pool: Option<rayon::ThreadPool>,
    pub(crate) chunk_size: usize,
}

impl<'a> ChunkRenderer<'a> {
    pub(crate) fn new(
        images: &'a [SourceImage],
        config: &'a RenderConfig,
        threading: &SweepThreading,
    ) -> RippleResult<Self> {
        let pool = if threading.parallel {
            Some(build_thread_pool(threading.threads)?)
        } else {
            None
        };
        Ok(Self {
            images,
            config,
            pool,
            chunk_size: normalized_chunk_size(threading.chunk_size),
        })
    }

    /// Render `chunk` and return frames in the same order as the keys.
    ///
    /// On failure the earliest failing job (in canonical order) is reported.
    pub(crate) fn render(&self, chunk: &[FrameKey]) -> RippleResult<Vec<FrameRGBA>> {
        let Some(pool) = &self.pool else {
            return chunk.iter().map(|key| self.render_one(*key)).collect();
        };
        let results: Vec<RippleResult<FrameRGBA>> =
            pool.install(|| chunk.par_iter().map(|key| self.render_one(*key)).collect());
        results.into_iter().collect()
    }

    fn render_one(&self, key: FrameKey) -> RippleResult<FrameRGBA> {
        let image = self.images.get(key.image_index).ok_or_else(|| {
            RippleError::render(key.image_index, key.step, "image index out of range")
        })?;
        let frame = render_frame_for(image, key.image_index, self.config, key.step)?;
        tracing::debug!(image = key.image_index, step = key.step, "frame rendered");
        Ok(frame)
    }
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    if chunk_size == 0 { 1 } else { chunk_size }
}

fn build_thread_pool(threads: Option<usize>) -> RippleResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RippleError::config("sweep 'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RippleError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/sweep/controller.rs"]
mod tests;
