use image::{DynamicImage, GrayImage, RgbImage};

use crate::foundation::core::Rgb8;

/// Immutable decoded source image, stored as RGB8.
///
/// Single-channel inputs are expanded to `(v, v, v)` on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceImage {
    pixels: RgbImage,
}

impl SourceImage {
    /// Wrap an RGB8 buffer.
    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// Expand a luma buffer to RGB8.
    pub fn from_luma(gray: &GrayImage) -> Self {
        Self {
            pixels: DynamicImage::ImageLuma8(gray.clone()).to_rgb8(),
        }
    }

    /// Convert any decoded image (alpha is dropped).
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        Self {
            pixels: img.to_rgb8(),
        }
    }

    /// Solid-color image of the given size.
    pub fn filled(width: u32, height: u32, color: Rgb8) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, image::Rgb([color.r, color.g, color.b])),
        }
    }

    /// Build from a per-pixel function.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb8) -> Self {
        Self {
            pixels: RgbImage::from_fn(width, height, |x, y| {
                let c = f(x, y);
                image::Rgb([c.r, c.g, c.b])
            }),
        }
    }

    /// Width in source pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in source pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Color at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        self.pixels.get_pixel_checked(x, y).copied().map(Rgb8::from)
    }

    /// Borrow the underlying raster.
    pub fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }
}

impl From<RgbImage> for SourceImage {
    fn from(pixels: RgbImage) -> Self {
        Self::from_rgb(pixels)
    }
}

impl From<&DynamicImage> for SourceImage {
    fn from(img: &DynamicImage) -> Self {
        Self::from_dynamic(img)
    }
}
