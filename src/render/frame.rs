use crate::{CanvasSize, Rgb8};

/// A finished frame as RGBA8 pixels.
///
/// Frames come out of the canvas **premultiplied**; every pixel the renderer writes is opaque, so
/// the distinction only matters to sinks that also accept foreign frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Frame dimensions.
    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Straight RGB color at `(x, y)`, or `None` out of bounds.
    pub fn pixel_rgb(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(off..off + 4)?;
        let [r, g, b] = unpremultiply([px[0], px[1], px[2]], px[3], self.premultiplied);
        Some(Rgb8::new(r, g, b))
    }

    /// Iterate straight RGB colors in row-major order.
    pub fn pixels_rgb(&self) -> impl Iterator<Item = Rgb8> + '_ {
        let premul = self.premultiplied;
        self.data.chunks_exact(4).map(move |px| {
            let [r, g, b] = unpremultiply([px[0], px[1], px[2]], px[3], premul);
            Rgb8::new(r, g, b)
        })
    }

    /// Convert to a straight-alpha `image::RgbaImage`.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        let mut straight = self.data.clone();
        if self.premultiplied {
            for px in straight.chunks_exact_mut(4) {
                let [r, g, b] = unpremultiply([px[0], px[1], px[2]], px[3], true);
                px[0] = r;
                px[1] = g;
                px[2] = b;
            }
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
    }
}

fn unpremultiply(rgb: [u8; 3], a: u8, premultiplied: bool) -> [u8; 3] {
    if !premultiplied || a == 255 {
        return rgb;
    }
    if a == 0 {
        return [0, 0, 0];
    }
    let a = u16::from(a);
    rgb.map(|c| ((u16::from(c) * 255 + a / 2) / a).min(255) as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
