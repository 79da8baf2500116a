//! Bresenham line drawing.

use super::PixelSink;

/// Plots every pixel of the line from `from` to `to`, both endpoints included.
///
/// Uses only integer arithmetic. The path is 8-connected and each pixel is
/// plotted exactly once, so `max(|dx|, |dy|) + 1` pixels in total.
pub fn draw_line<S: PixelSink + ?Sized>(from: (i32, i32), to: (i32, i32), sink: &mut S) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;

    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let step_x = if x < x1 { 1 } else { -1 };
    let step_y = if y < y1 { 1 } else { -1 };

    // Positive error favors a step in x, negative a step in y
    let mut err = dx - dy;

    loop {
        sink.plot(x, y);
        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += step_x;
        }
        // Both branches may run: a diagonal step
        if e2 < dx {
            err += dx;
            y += step_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        draw_line(from, to, &mut |x, y| points.push((x, y)));
        points
    }

    #[test]
    fn horizontal_line_visits_each_column_once() {
        assert_eq!(
            collect((0, 0), (5, 0)),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]
        );
    }

    #[test]
    fn diagonal_line() {
        assert_eq!(collect((0, 0), (3, 3)), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn single_point() {
        assert_eq!(collect((4, -2), (4, -2)), vec![(4, -2)]);
    }

    #[test]
    fn both_directions_keep_endpoints_and_length() {
        // The midpoint tie at (5, 4.5) may resolve differently per direction
        for (from, to) in [((1, 7), (9, 2)), ((9, 2), (1, 7))] {
            let points = collect(from, to);
            assert_eq!(points.len(), 9);
            assert_eq!(points.first(), Some(&from));
            assert_eq!(points.last(), Some(&to));
            for pair in points.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert_eq!((a.0 - b.0).abs(), 1);
                assert!((a.1 - b.1).abs() <= 1);
            }
        }
    }

    #[test]
    fn steep_line_is_eight_connected() {
        let points = collect((0, 0), (3, 11));
        assert_eq!(points.len(), 12);
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() == 1);
        }
    }
}
