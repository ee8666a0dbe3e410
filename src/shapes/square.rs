use crate::shapes::{RingContext, Segment, StrokeStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Horizontal,
    Vertical,
    Done,
}

/// Perimeter of the axis-aligned square with corners `center ± r`, one unit segment per pixel.
///
/// Horizontal edges are walked first (top then bottom at each column), then vertical edges (left
/// then right at each row). Every unit segment samples its own pixel. A zero half-side yields a
/// single point segment at the center.
#[derive(Clone, Debug)]
pub struct SquareRing<'c> {
    ctx: &'c RingContext<'c>,
    lo: (i64, i64),
    hi: (i64, i64),
    sides: u8,
    phase: Phase,
    cursor: i64,
    end: i64,
    side: u8,
}

impl<'c> SquareRing<'c> {
    pub(crate) fn new(radius: u32, ctx: &'c RingContext<'c>) -> Self {
        let r = i64::from(radius);
        let (cx, cy) = ctx.size.center();
        let lo = (cx - r, cy - r);
        let hi = (cx + r, cy + r);
        let (start, end) = clip_span(lo.0, hi.0, i64::from(ctx.size.width));
        Self {
            ctx,
            lo,
            hi,
            sides: if radius == 0 { 1 } else { 2 },
            phase: Phase::Horizontal,
            cursor: start,
            end,
            side: 0,
        }
    }

    fn enter_vertical(&mut self) {
        if self.sides == 1 {
            self.phase = Phase::Done;
            return;
        }
        let (start, end) = clip_span(self.lo.1, self.hi.1, i64::from(self.ctx.size.height));
        self.phase = Phase::Vertical;
        self.cursor = start;
        self.end = end;
        self.side = 0;
    }

    /// Current `(cursor, side)` and advance to the next slot.
    fn advance(&mut self) -> (i64, u8) {
        let slot = (self.cursor, self.side);
        self.side += 1;
        if self.side == self.sides {
            self.side = 0;
            self.cursor += 1;
        }
        slot
    }
}

/// `[lo, hi]` intersected with `[0, len)`, as a half-open range.
fn clip_span(lo: i64, hi: i64, len: i64) -> (i64, i64) {
    let start = lo.max(0);
    let end = (hi + 1).min(len);
    (start, end.max(start))
}

impl Iterator for SquareRing<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Horizontal => {
                    if self.cursor >= self.end {
                        self.enter_vertical();
                        continue;
                    }
                    let (x, side) = self.advance();
                    let y = if side == 0 { self.lo.1 } else { self.hi.1 };
                    if self.ctx.size.contains(x, y) {
                        let to = if self.sides == 1 { (x, y) } else { (x + 1, y) };
                        return Some(self.ctx.segment_at(x, y, to, StrokeStyle::Wide));
                    }
                }
                Phase::Vertical => {
                    if self.cursor >= self.end {
                        self.phase = Phase::Done;
                        continue;
                    }
                    let (y, side) = self.advance();
                    let x = if side == 0 { self.lo.0 } else { self.hi.0 };
                    if self.ctx.size.contains(x, y) {
                        return Some(self.ctx.segment_at(x, y, (x, y + 1), StrokeStyle::Wide));
                    }
                }
            }
        }
    }
}
