//! Polygon filling: active-edge-table scanline fill and BFS flood fill.

use std::collections::VecDeque;

use super::PixelSink;
use crate::clipping::ClipRect;
use crate::colors::Rgb;
use crate::render::framebuffer::Framebuffer;

/// A non-horizontal polygon edge, stored by its lower endpoint.
#[derive(Debug, Clone, Copy)]
struct Edge {
    y_lo: i64,
    /// First scanline the edge no longer covers.
    y_hi: i64,
    x_lo: i64,
    dx: i64,
    /// Always positive.
    dy: i64,
}

impl Edge {
    fn new((x0, y0): (i32, i32), (x1, y1): (i32, i32)) -> Self {
        let (lower, upper) = if y0 < y1 { ((x0, y0), (x1, y1)) } else { ((x1, y1), (x0, y0)) };
        Self {
            y_lo: lower.1 as i64,
            y_hi: upper.1 as i64,
            x_lo: lower.0 as i64,
            dx: upper.0 as i64 - lower.0 as i64,
            dy: upper.1 as i64 - lower.1 as i64,
        }
    }

    /// First pixel column at or right of the crossing with scanline `y`,
    /// i.e. `ceil(x_lo + dx * (y - y_lo) / dy)` without rounding error.
    fn ceil_x(&self, y: i64) -> i64 {
        let num = self.x_lo as i128 * self.dy as i128 + self.dx as i128 * (y - self.y_lo) as i128;
        let den = self.dy as i128;
        (-(-num).div_euclid(den)) as i64
    }
}

/// Fills a simple polygon with the even-odd rule.
///
/// Edges are bucketed by their lower y into an edge table. Each scanline
/// `y` admits the edges starting there, evicts edges whose `y_max <= y`,
/// sorts the active crossings by x and fills between pairs `(0, 1), (2, 3), ...`.
/// Spans cover the pixels whose left edge lies in `[x_left, x_right)`, and the
/// top scanline of every edge is excluded, so polygons sharing an edge do not
/// overlap. Crossings are evaluated exactly in integer arithmetic.
///
/// The edge table holds one bucket per covered scanline, so memory grows with
/// the polygon's height. Use [`fill_polygon_clipped`] when the points may lie
/// far outside the target.
///
/// Fewer than three points draw nothing. Self-intersecting polygons are
/// filled by the even-odd rule without further guarantees.
pub fn fill_polygon<S: PixelSink + ?Sized>(points: &[(i32, i32)], sink: &mut S) {
    let unbounded = ClipRect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
    fill_polygon_clipped(points, &unbounded, sink);
}

/// [`fill_polygon`] restricted to the pixels inside `clip`.
///
/// Only the scanlines inside `clip` get an edge table bucket; edges starting
/// below it are admitted on its first row.
pub fn fill_polygon_clipped<S: PixelSink + ?Sized>(
    points: &[(i32, i32)],
    clip: &ClipRect,
    sink: &mut S,
) {
    if points.len() < 3 {
        return;
    }

    let y_min = points.iter().map(|p| p.1).min().unwrap_or(0) as i64;
    let y_max = points.iter().map(|p| p.1).max().unwrap_or(0) as i64;
    let first = y_min.max(clip.y_min as i64);
    let last = (y_max - 1).min(clip.y_max as i64);
    if first > last {
        return;
    }

    let mut edge_table: Vec<Vec<Edge>> = vec![Vec::new(); (last - first + 1) as usize];
    for (i, &p0) in points.iter().enumerate() {
        let p1 = points[(i + 1) % points.len()];
        if p0.1 == p1.1 {
            continue;
        }

        let edge = Edge::new(p0, p1);
        if edge.y_hi <= first || edge.y_lo > last {
            continue;
        }
        edge_table[(edge.y_lo.max(first) - first) as usize].push(edge);
    }

    let (x_start, x_end) = (clip.x_min as i64, clip.x_max as i64 + 1);
    let mut active: Vec<Edge> = Vec::new();
    let mut crossings: Vec<i64> = Vec::new();
    for (row, bucket) in edge_table.iter().enumerate() {
        let y = first + row as i64;

        active.extend_from_slice(bucket);
        active.retain(|e| e.y_hi > y);

        // Sorting the rounded crossings keeps the order of the exact ones
        crossings.clear();
        crossings.extend(active.iter().map(|e| e.ceil_x(y)));
        crossings.sort_unstable();

        for pair in crossings.chunks_exact(2) {
            for x in pair[0].max(x_start)..pair[1].min(x_end) {
                sink.plot(x as i32, y as i32);
            }
        }
    }
}

/// Flood fills the 4-connected region around `seed` with `fill`.
///
/// A pixel is filled when it is inside the framebuffer and its color is
/// neither `boundary` nor `fill`. Uses an explicit queue, so region size is
/// bounded by memory rather than stack depth. Returns the number of pixels
/// filled.
pub fn flood_fill(framebuffer: &mut Framebuffer, seed: (i32, i32), fill: Rgb, boundary: Rgb) -> usize {
    let mut queue = VecDeque::new();
    queue.push_back(seed);
    let mut filled = 0;

    while let Some((x, y)) = queue.pop_front() {
        match framebuffer.get_pixel(x, y) {
            Some(current) if current != boundary && current != fill => {}
            _ => continue,
        }

        framebuffer.set_pixel(x, y, fill);
        filled += 1;

        queue.push_back((x + 1, y));
        queue.push_back((x - 1, y));
        queue.push_back((x, y + 1));
        queue.push_back((x, y - 1));
    }

    filled
}
