use std::f64::consts::TAU;

use crate::foundation::math::trunc_i64;
use crate::shapes::{RingContext, Segment, StrokeStyle};

/// Circle of radius `r` around the canvas center, split into `angular_resolution` chords.
///
/// Each on-canvas vertex `p_i` contributes the chord `p_i -> p_{i+1}` colored by the pixel under
/// `p_i`; the last chord closes back onto `p_0`. Off-canvas vertices contribute nothing. A zero
/// radius collapses to a single point segment.
#[derive(Clone, Debug)]
pub struct CircleRing<'c> {
    ctx: &'c RingContext<'c>,
    radius: f64,
    center: (i64, i64),
    points: u32,
    i: u32,
}

impl<'c> CircleRing<'c> {
    pub(crate) fn new(radius: u32, ctx: &'c RingContext<'c>) -> Self {
        let points = if radius == 0 { 1 } else { ctx.angular_resolution };
        Self {
            ctx,
            radius: f64::from(radius),
            center: ctx.size.center(),
            points,
            i: 0,
        }
    }

    fn vertex(&self, i: u32) -> (i64, i64) {
        if self.radius == 0.0 {
            return self.center;
        }
        let angle = f64::from(i % self.points) / f64::from(self.points) * TAU;
        let (cx, cy) = self.center;
        (
            trunc_i64(cx as f64 + self.radius * angle.cos()),
            trunc_i64(cy as f64 + self.radius * angle.sin()),
        )
    }
}

impl Iterator for CircleRing<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        while self.i < self.points {
            let i = self.i;
            self.i += 1;
            let (x, y) = self.vertex(i);
            if !self.ctx.size.contains(x, y) {
                continue;
            }
            let next = if self.radius == 0.0 {
                (x, y)
            } else {
                self.vertex(i + 1)
            };
            return Some(self.ctx.segment_at(x, y, next, StrokeStyle::Wide));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some((self.points - self.i) as usize))
    }
}
