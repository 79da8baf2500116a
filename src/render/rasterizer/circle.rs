//! Circle rasterization.

use super::PixelSink;

/// Plots the eight symmetric images of `(x, y)` around `center`.
#[inline]
fn plot_octants<S: PixelSink + ?Sized>(center: (i32, i32), x: i32, y: i32, sink: &mut S) {
    let (cx, cy) = center;
    sink.plot(cx + x, cy + y);
    sink.plot(cx - x, cy + y);
    sink.plot(cx + x, cy - y);
    sink.plot(cx - x, cy - y);
    sink.plot(cx + y, cy + x);
    sink.plot(cx - y, cy + x);
    sink.plot(cx + y, cy - x);
    sink.plot(cx - y, cy - x);
}

/// Plots the outline of a circle with the midpoint algorithm.
///
/// Walks one octant from `(0, r)` while `x <= y` and mirrors each point into
/// the other seven, so pixels on the octant borders are plotted more than
/// once. Negative radii draw nothing.
pub fn draw_circle<S: PixelSink + ?Sized>(center: (i32, i32), radius: i32, sink: &mut S) {
    if radius < 0 {
        return;
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;

    while x <= y {
        plot_octants(center, x, y, sink);
        if d > 0 {
            d += 4 * (x - y) + 10;
            y -= 1;
        } else {
            d += 4 * x + 6;
        }
        x += 1;
    }
}

/// Plots a filled disc one horizontal span per row.
///
/// Each row `cy + dy` spans `cx - w ..= cx + w` with `w = floor(sqrt(r² - dy²))`.
pub fn fill_circle<S: PixelSink + ?Sized>(center: (i32, i32), radius: i32, sink: &mut S) {
    if radius < 0 {
        return;
    }

    let (cx, cy) = center;
    let r2 = radius as i64 * radius as i64;
    for dy in -radius..=radius {
        let half = ((r2 - dy as i64 * dy as i64) as f64).sqrt() as i32;
        for x in cx - half..=cx + half {
            sink.plot(x, cy + dy);
        }
    }
}
