use crate::render::canvas::Canvas;
use crate::render::frame::FrameRGBA;
use crate::shapes::{RingContext, ring_params, ring_segments};
use crate::{
    CanvasSize, InkMode, PixelSampler, RenderConfig, Rgb8, RippleError, RippleResult, SourceImage,
};

/// Draw one frame of the ripple effect for `step`.
///
/// Rings (or scanlines) are placed at `0, step, 2 * step, ...` up to the shape's maximum ring
/// parameter, and every segment they yield is drawn onto a fresh white canvas of
/// `source size * scale_factor`. The function is pure: the same inputs produce the same pixels.
///
/// Returns [`RippleError::Config`] for an invalid config or `step == 0`, and
/// [`RippleError::Render`] when the canvas cannot be allocated.
pub fn render_frame(image: &SourceImage, config: &RenderConfig, step: u32) -> RippleResult<FrameRGBA> {
    config.validate()?;
    if step == 0 {
        return Err(RippleError::config("step must be >= 1"));
    }
    render_frame_for(image, 0, config, step)
}

/// [`render_frame`] without config validation; errors carry `image_index`.
#[tracing::instrument(level = "debug", skip(image, config), fields(shape = %config.shape))]
pub(crate) fn render_frame_for(
    image: &SourceImage,
    image_index: usize,
    config: &RenderConfig,
    step: u32,
) -> RippleResult<FrameRGBA> {
    let size = CanvasSize::scaled(image.width(), image.height(), config.scale_factor)?;
    let mut canvas = Canvas::new(size).ok_or_else(|| {
        RippleError::render(
            image_index,
            step,
            format!("failed to allocate {}x{} canvas", size.width, size.height),
        )
    })?;

    let sampler = PixelSampler::new(image, config.scale_factor, config.grayscale);
    let ctx = RingContext::new(size, sampler, config, step);

    let mut segments = 0u64;
    for ring in ring_params(config.shape, size, step) {
        for seg in ring_segments(config.shape, ring, &ctx) {
            canvas.draw_segment(&seg, ink_color(config.ink, seg.color));
            segments += 1;
        }
    }

    tracing::debug!(segments, "frame drawn");
    Ok(canvas.into_frame())
}

fn ink_color(ink: InkMode, sampled: Rgb8) -> Rgb8 {
    match ink {
        InkMode::Sampled => sampled,
        InkMode::Black => Rgb8::BLACK,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
