use std::f64::consts::FRAC_PI_2;

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::render::frame::FrameRGBA;
use crate::shapes::{Segment, StrokeStyle};
use crate::{CanvasSize, Point, Rgb8, Vec2};

/// Mutable white-backed drawing surface for one frame.
///
/// Integer segment coordinates address pixel centers, so every path is drawn with a half-pixel
/// translation. Anti-aliasing is off: a pixel is either untouched or takes the stroke color.
pub struct Canvas {
    pixmap: Pixmap,
    size: CanvasSize,
    to_pixel_centers: Transform,
}

impl Canvas {
    /// Allocate an opaque white canvas; `None` when the pixmap cannot be allocated.
    pub fn new(size: CanvasSize) -> Option<Self> {
        let mut pixmap = Pixmap::new(size.width, size.height)?;
        pixmap.fill(Color::WHITE);
        Some(Self {
            pixmap,
            size,
            to_pixel_centers: Transform::from_translate(0.5, 0.5),
        })
    }

    /// Canvas dimensions.
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Draw `seg` in `color` according to its stroke style.
    pub fn draw_segment(&mut self, seg: &Segment, color: Rgb8) {
        let paint = solid_paint(color);
        match seg.style {
            StrokeStyle::Wide => self.draw_wide(seg.from, seg.to, seg.thickness, &paint),
            StrokeStyle::Banded => self.draw_banded(seg.from, seg.to, seg.thickness, &paint),
        }
    }

    /// One band of `thickness` pixels, centered on the segment like [`Self::draw_banded`].
    fn draw_wide(&mut self, from: Point, to: Point, thickness: u32, paint: &Paint<'_>) {
        self.fill_band(from, to, thickness, paint);
    }

    /// `thickness` parallel unit strokes, stroke `i` shifted by `i - thickness / 2` along the
    /// left-hand normal of the segment direction.
    fn draw_banded(&mut self, from: Point, to: Point, thickness: u32, paint: &Paint<'_>) {
        let normal = Vec2::from_angle((to - from).atan2() + FRAC_PI_2);
        let half = i64::from(thickness / 2);
        for i in 0..i64::from(thickness) {
            let offset = normal * (i - half) as f64;
            self.fill_band(from + offset, to + offset, 1, paint);
        }
    }

    /// Fill the pixels from `from` to `to` inclusive, spanning `[-t / 2, t - t / 2)` pixel rows
    /// across the segment.
    ///
    /// The band is a rectangle in pixel-center space whose edges sit half a pixel outside the
    /// covered centers, so non-anti-aliased filling never lands on an edge.
    fn fill_band(&mut self, from: Point, to: Point, thickness: u32, paint: &Paint<'_>) {
        let t = thickness.max(1);
        let lo = -f64::from(t / 2) - 0.5;
        let hi = lo + f64::from(t);
        let corners = if from == to {
            [
                from + Vec2::new(lo, lo),
                from + Vec2::new(hi, lo),
                from + Vec2::new(hi, hi),
                from + Vec2::new(lo, hi),
            ]
        } else {
            let dir = (to - from).normalize();
            let normal = Vec2::from_angle(dir.atan2() + FRAC_PI_2);
            let start = from - dir * 0.5;
            let end = to + dir * 0.5;
            [
                start + normal * lo,
                end + normal * lo,
                end + normal * hi,
                start + normal * hi,
            ]
        };

        let mut pb = PathBuilder::new();
        pb.move_to(corners[0].x as f32, corners[0].y as f32);
        for c in &corners[1..] {
            pb.line_to(c.x as f32, c.y as f32);
        }
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            paint,
            FillRule::Winding,
            self.to_pixel_centers,
            None,
        );
    }

    /// Straight color at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgb8::new(c.red(), c.green(), c.blue()))
    }

    /// Hand the pixels off as an immutable frame.
    pub fn into_frame(self) -> FrameRGBA {
        FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: self.pixmap.take(),
            premultiplied: true,
        }
    }
}

fn solid_paint(color: Rgb8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = false;
    paint
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
