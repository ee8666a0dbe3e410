use crate::foundation::error::{RippleError, RippleResult};
use crate::foundation::math::mean3_u8;

pub use kurbo::{Point, Vec2};

/// Straight (non-premultiplied) RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Opaque white, the canvas background.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray with all channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Truncating channel average, `floor((r + g + b) / 3)`.
    pub fn intensity(self) -> u8 {
        mean3_u8(self.r, self.g, self.b)
    }

    /// Collapse to `(I, I, I)` where `I` is [`Rgb8::intensity`].
    pub fn to_gray(self) -> Self {
        Self::gray(self.intensity())
    }

    /// `true` when all three channels are equal.
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<image::Rgb<u8>> for Rgb8 {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self { r, g, b }
    }
}

/// Pixel dimensions of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Source dimensions multiplied by `scale`, rejecting overflow and empty sizes.
    pub fn scaled(width: u32, height: u32, scale: u32) -> RippleResult<Self> {
        if width == 0 || height == 0 {
            return Err(RippleError::config("source image must be non-empty"));
        }
        let (Some(w), Some(h)) = (width.checked_mul(scale), height.checked_mul(scale)) else {
            return Err(RippleError::config(format!(
                "scaled canvas {width}x{height} * {scale} overflows u32"
            )));
        };
        Ok(Self {
            width: w,
            height: h,
        })
    }

    /// Integer center `(width / 2, height / 2)`, truncating.
    pub fn center(self) -> (i64, i64) {
        (i64::from(self.width / 2), i64::from(self.height / 2))
    }

    /// `true` when `(x, y)` addresses a pixel of this canvas.
    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Length of a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Playback rate handed to animation sinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds).
    pub den: u32,
}

impl Fps {
    /// Validated rate `num / den`; both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> RippleResult<Self> {
        if den == 0 {
            return Err(RippleError::config("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RippleError::config("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Display time of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Duration of `frames` frames in seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 10, den: 1 }
    }
}

/// Identity of one frame within a sweep.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameKey {
    /// Position of the source image in the sweep input.
    pub image_index: usize,
    /// Step size (ring spacing) the frame was drawn with.
    pub step: u32,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
