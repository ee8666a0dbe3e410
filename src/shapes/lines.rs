use crate::shapes::{RingContext, Segment, StrokeStyle};

/// One horizontal scanline at row `y`, sampled every `row_stride` pixels.
#[derive(Clone, Debug)]
pub struct ScanlineRow<'c> {
    ctx: &'c RingContext<'c>,
    y: i64,
    x: i64,
    stride: i64,
}

impl<'c> ScanlineRow<'c> {
    pub(crate) fn new(row: u32, ctx: &'c RingContext<'c>) -> Self {
        Self {
            ctx,
            y: i64::from(row),
            x: 0,
            stride: i64::from(ctx.row_stride.max(1)),
        }
    }
}

impl Iterator for ScanlineRow<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let (x, y) = (self.x, self.y);
        if !self.ctx.size.contains(x, y) {
            return None;
        }
        self.x += self.stride;
        Some(
            self.ctx
                .segment_at(x, y, (x + self.stride, y), StrokeStyle::Banded),
        )
    }
}
