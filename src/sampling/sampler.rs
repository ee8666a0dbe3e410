use crate::{Rgb8, SourceImage};

/// Maps frame-space coordinates to source colors.
///
/// The source coordinate is `clamp(floor(frame / scale), 0, dim - 1)` on each axis, so any `i64`
/// query is answered without an out-of-bounds read. An empty image has no pixel to clamp to and
/// samples as white, the canvas background.
#[derive(Clone, Copy, Debug)]
pub struct PixelSampler<'a> {
    image: &'a SourceImage,
    scale: i64,
    grayscale: bool,
}

impl<'a> PixelSampler<'a> {
    /// `scale_factor` must be >= 1 (guaranteed by [`crate::RenderConfig::validate`]); `0` is
    /// treated as `1`.
    pub fn new(image: &'a SourceImage, scale_factor: u32, grayscale: bool) -> Self {
        Self {
            image,
            scale: i64::from(scale_factor.max(1)),
            grayscale,
        }
    }

    /// Source pixel index used for a frame-space query.
    pub fn source_coord(&self, frame_x: i64, frame_y: i64) -> (u32, u32) {
        let max_x = i64::from(self.image.width().saturating_sub(1));
        let max_y = i64::from(self.image.height().saturating_sub(1));
        let sx = frame_x.div_euclid(self.scale).clamp(0, max_x);
        let sy = frame_y.div_euclid(self.scale).clamp(0, max_y);
        (sx as u32, sy as u32)
    }

    /// Color under a frame-space point, desaturated when grayscale is enabled.
    pub fn sample(&self, frame_x: i64, frame_y: i64) -> Rgb8 {
        let (sx, sy) = self.source_coord(frame_x, frame_y);
        let c = self.image.pixel(sx, sy).unwrap_or(Rgb8::WHITE);
        if self.grayscale { c.to_gray() } else { c }
    }

    /// Upscale factor between canvas and source coordinates.
    pub fn scale_factor(&self) -> u32 {
        self.scale as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/sampler.rs"]
mod tests;
