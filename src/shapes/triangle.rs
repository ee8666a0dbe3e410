use crate::foundation::math::{floor_div, trunc_i64};
use crate::shapes::{RingContext, Segment, StrokeStyle};

/// Upward-pointing equilateral triangle whose vertices sit `r` from the canvas center.
///
/// Edges run top -> left -> right -> top. Each edge is walked in `max(|dx|, |dy|)` integer steps
/// (both endpoints included) and every on-canvas step emits a banded unit segment. Zero-length
/// edges contribute their single point once; a zero radius yields one point segment at the center, drawn
/// like the other shapes' zero rings.
#[derive(Clone, Debug)]
pub struct TriangleRing<'c> {
    ctx: &'c RingContext<'c>,
    vertices: [(i64, i64); 3],
    edges: usize,
    edge: usize,
    s: i64,
}

impl<'c> TriangleRing<'c> {
    pub(crate) fn new(radius: u32, ctx: &'c RingContext<'c>) -> Self {
        Self {
            ctx,
            vertices: triangle_vertices(radius, ctx.size.center()),
            edges: if radius == 0 { 1 } else { 3 },
            edge: 0,
            s: 0,
        }
    }

    fn edge_endpoints(&self) -> ((i64, i64), (i64, i64)) {
        (self.vertices[self.edge], self.vertices[(self.edge + 1) % 3])
    }
}

/// `[top, left, right]` for radius `r` around `center`.
pub(crate) fn triangle_vertices(radius: u32, center: (i64, i64)) -> [(i64, i64); 3] {
    let (cx, cy) = center;
    let r = f64::from(radius);
    let half_base = r * 3f64.sqrt() / 2.0;
    let drop = trunc_i64(cy as f64 + r / 2.0);
    [
        (cx, cy - i64::from(radius)),
        (trunc_i64(cx as f64 - half_base), drop),
        (trunc_i64(cx as f64 + half_base), drop),
    ]
}

impl Iterator for TriangleRing<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        while self.edge < self.edges {
            let ((x0, y0), (x1, y1)) = self.edge_endpoints();
            let (dx, dy) = (x1 - x0, y1 - y0);
            let n = dx.abs().max(dy.abs());
            if self.s > n {
                self.edge += 1;
                self.s = 0;
                continue;
            }
            let s = self.s;
            self.s += 1;
            let (x, y) = if n == 0 {
                (x0, y0)
            } else {
                (x0 + floor_div(s * dx, n), y0 + floor_div(s * dy, n))
            };
            if !self.ctx.size.contains(x, y) {
                continue;
            }
            if self.edges == 1 {
                return Some(self.ctx.segment_at(x, y, (x, y), StrokeStyle::Wide));
            }
            return Some(self.ctx.segment_at(x, y, (x + 1, y), StrokeStyle::Banded));
        }
        None
    }
}
