//! Ring geometry: one lazy segment stream per concentric ring (or scanline).
//!
//! Generators never touch pixels. They sample the source image through a [`PixelSampler`],
//! resolve stroke width through a [`ThicknessModel`], and yield [`Segment`] values that the frame
//! renderer draws.

pub(crate) mod circle;
pub(crate) mod lines;
pub(crate) mod square;
pub(crate) mod triangle;

use crate::{CanvasSize, PixelSampler, Point, RenderConfig, Rgb8, RowSampling, ShapeKind};
use crate::sampling::thickness::ThicknessModel;

use circle::CircleRing;
use lines::ScanlineRow;
use square::SquareRing;
use triangle::TriangleRing;

/// How a segment's thickness is turned into pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrokeStyle {
    /// One stroke of width `thickness`.
    Wide,
    /// `thickness` unit-width strokes, stroke `i` offset by `i - thickness / 2` along the normal.
    Banded,
}

/// One drawable piece of a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start point in canvas pixels.
    pub from: Point,
    /// End point in canvas pixels.
    pub to: Point,
    /// Sampled stroke color.
    pub color: Rgb8,
    /// Stroke width, already floored by the minimum thickness.
    pub thickness: u32,
    /// Stroke construction.
    pub style: StrokeStyle,
}

impl Segment {
    /// `true` when the segment starts and ends on the same point.
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

/// Everything a generator needs to resolve segments for one frame.
#[derive(Clone, Copy, Debug)]
pub struct RingContext<'a> {
    /// Scaled canvas size.
    pub size: CanvasSize,
    /// Source color lookup.
    pub sampler: PixelSampler<'a>,
    /// Color-to-width mapping.
    pub thickness: ThicknessModel,
    /// Current sweep step.
    pub step: u32,
    /// Circle subdivisions.
    pub angular_resolution: u32,
    /// Parallel-lines horizontal stride.
    pub row_stride: u32,
}

impl<'a> RingContext<'a> {
    /// Build the per-frame context from a validated config.
    pub fn new(
        size: CanvasSize,
        sampler: PixelSampler<'a>,
        config: &RenderConfig,
        step: u32,
    ) -> Self {
        let row_stride = match config.row_sampling {
            RowSampling::EveryPixel => 1,
            RowSampling::ScaleFactor => config.scale_factor.max(1),
        };
        Self {
            size,
            sampler,
            thickness: ThicknessModel::new(config.intensity_ceiling, config.min_thickness),
            step,
            angular_resolution: config.angular_resolution.max(3),
            row_stride,
        }
    }

    /// Sample at the integer point `(x, y)` and build a segment to `to`.
    pub(crate) fn segment_at(&self, x: i64, y: i64, to: (i64, i64), style: StrokeStyle) -> Segment {
        let color = self.sampler.sample(x, y);
        Segment {
            from: Point::new(x as f64, y as f64),
            to: Point::new(to.0 as f64, to.1 as f64),
            color,
            thickness: self.thickness.thickness(color, self.step),
            style,
        }
    }
}

/// Lazy segment stream for one ring of any shape.
#[derive(Clone, Debug)]
pub enum RingSegments<'c> {
    /// See [`ShapeKind::Circle`].
    Circle(CircleRing<'c>),
    /// See [`ShapeKind::Square`].
    Square(SquareRing<'c>),
    /// See [`ShapeKind::Triangle`].
    Triangle(TriangleRing<'c>),
    /// See [`ShapeKind::ParallelLines`].
    Lines(ScanlineRow<'c>),
}

impl Iterator for RingSegments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        match self {
            Self::Circle(it) => it.next(),
            Self::Square(it) => it.next(),
            Self::Triangle(it) => it.next(),
            Self::Lines(it) => it.next(),
        }
    }
}

/// Segments of the ring with parameter `ring` (radius, half-side, or row) for `shape`.
///
/// Re-invoking with the same arguments yields the same sequence.
pub fn ring_segments<'c>(shape: ShapeKind, ring: u32, ctx: &'c RingContext<'c>) -> RingSegments<'c> {
    match shape {
        ShapeKind::Circle => RingSegments::Circle(CircleRing::new(ring, ctx)),
        ShapeKind::Square => RingSegments::Square(SquareRing::new(ring, ctx)),
        ShapeKind::Triangle => RingSegments::Triangle(TriangleRing::new(ring, ctx)),
        ShapeKind::ParallelLines => RingSegments::Lines(ScanlineRow::new(ring, ctx)),
    }
}

/// Exclusive upper bound of the ring parameter for `shape` on a canvas of `size`.
pub fn max_ring_param(shape: ShapeKind, size: CanvasSize) -> u32 {
    match shape {
        ShapeKind::Circle | ShapeKind::Square => {
            let (cx, cy) = size.center();
            (cx as f64).hypot(cy as f64).trunc() as u32
        }
        ShapeKind::Triangle => f64::from(size.width).hypot(f64::from(size.height)).trunc() as u32,
        ShapeKind::ParallelLines => size.height,
    }
}

/// Ring parameters drawn for one frame: `0, step, 2 * step, ...` below [`max_ring_param`].
pub fn ring_params(shape: ShapeKind, size: CanvasSize, step: u32) -> impl Iterator<Item = u32> {
    (0..max_ring_param(shape, size)).step_by(step.max(1) as usize)
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/mod.rs"]
mod tests;
