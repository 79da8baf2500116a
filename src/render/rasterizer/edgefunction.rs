//! Edge function triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's bounding box and clip it to the framebuffer
//! 2. For every pixel center in the box, evaluate three edge functions
//! 3. The pixel is covered if all three have the sign of the triangle's area
//!
//! # Edge Function
//!
//! For an edge from A to B, evaluated at P:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! the 2D cross product (B - A) × (P - A). Its sign tells which side of the
//! edge P is on; the three values divided by the total area are P's
//! barycentric coordinates, used for depth and shader interpolation.
//!
//! Both windings are accepted. Culling is the caller's decision.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use super::shader::PixelShader;
use crate::math::vec3::Vec3;
use crate::render::framebuffer::Framebuffer;

/// Signed, doubled area of the triangle `a b p`.
#[inline]
fn edge_function(a: Vec3, b: Vec3, p: Vec3) -> f32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Rasterizes a screen-space triangle into `framebuffer`.
///
/// `points` carry pixel coordinates in `x, y` and depth in `z` (smaller is
/// nearer). Depth is interpolated linearly in screen space and each covered
/// pixel passes through [`Framebuffer::test_depth`] before the shader runs.
/// Returns the number of pixels written.
pub fn fill_triangle<S: PixelShader + ?Sized>(
    framebuffer: &mut Framebuffer,
    points: [Vec3; 3],
    shader: &S,
) -> usize {
    let [v0, v1, v2] = points;

    // ─────────────────────────────────────────────────────────────────────
    // Bounding box, clipped to the framebuffer
    // ─────────────────────────────────────────────────────────────────────
    let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
    let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(framebuffer.width() as i32 - 1);
    let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
    let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(framebuffer.height() as i32 - 1);

    let area = edge_function(v0, v1, v2);
    if area.abs() < f32::EPSILON {
        return 0;
    }
    let inv_area = 1.0 / area;

    let mut written = 0;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);

            let w0 = edge_function(v1, v2, p);
            let w1 = edge_function(v2, v0, p);
            let w2 = edge_function(v0, v1, p);

            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };
            if !inside {
                continue;
            }

            let lambda = [w0 * inv_area, w1 * inv_area, w2 * inv_area];
            let depth = lambda[0] * v0.z + lambda[1] * v1.z + lambda[2] * v2.z;
            if framebuffer.test_depth(x, y, depth) {
                framebuffer.set_pixel(x, y, shader.shade(lambda));
                written += 1;
            }
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Rgb;
    use crate::render::rasterizer::shader::FlatShader;

    fn tri(z: f32) -> [Vec3; 3] {
        [
            Vec3::new(0.0, 0.0, z),
            Vec3::new(10.0, 0.0, z),
            Vec3::new(5.0, 10.0, z),
        ]
    }

    #[test]
    fn covers_about_its_area() {
        let mut fb = Framebuffer::new(16, 16);
        let written = fill_triangle(&mut fb, tri(0.5), &FlatShader::new(Rgb::WHITE));
        assert!((written as f32 - 50.0).abs() <= 6.0, "{written}");

        for y in 0..16 {
            for x in 0..16 {
                if fb.get_pixel(x, y) == Some(Rgb::WHITE) {
                    assert!(x <= 10 && y <= 10);
                }
            }
        }
    }

    #[test]
    fn winding_does_not_matter() {
        let [a, b, c] = tri(0.5);
        let mut ccw = Framebuffer::new(16, 16);
        let mut cw = Framebuffer::new(16, 16);
        let shader = FlatShader::new(Rgb::WHITE);
        assert_eq!(
            fill_triangle(&mut ccw, [a, b, c], &shader),
            fill_triangle(&mut cw, [a, c, b], &shader)
        );
        assert_eq!(ccw.as_bytes(), cw.as_bytes());
    }

    #[test]
    fn nearer_triangle_wins_regardless_of_order() {
        let near = FlatShader::new(Rgb::RED);
        let far = FlatShader::new(Rgb::BLUE);

        let mut fb = Framebuffer::new(16, 16);
        fill_triangle(&mut fb, tri(0.3), &near);
        assert_eq!(fill_triangle(&mut fb, tri(0.6), &far), 0);
        assert_eq!(fb.get_pixel(5, 3), Some(Rgb::RED));

        let mut fb = Framebuffer::new(16, 16);
        fill_triangle(&mut fb, tri(0.6), &far);
        fill_triangle(&mut fb, tri(0.3), &near);
        assert_eq!(fb.get_pixel(5, 3), Some(Rgb::RED));
    }

    #[test]
    fn degenerate_and_offscreen_triangles_write_nothing() {
        let mut fb = Framebuffer::new(8, 8);
        let shader = FlatShader::new(Rgb::WHITE);
        let line = [Vec3::new(0.0, 0.0, 0.5), Vec3::new(4.0, 4.0, 0.5), Vec3::new(8.0, 8.0, 0.5)];
        assert_eq!(fill_triangle(&mut fb, line, &shader), 0);

        let offscreen = [
            Vec3::new(-20.0, -20.0, 0.5),
            Vec3::new(-10.0, -20.0, 0.5),
            Vec3::new(-15.0, -10.0, 0.5),
        ];
        assert_eq!(fill_triangle(&mut fb, offscreen, &shader), 0);
    }

    #[test]
    fn depth_is_interpolated() {
        let mut fb = Framebuffer::new(4, 4);
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.8),
            Vec3::new(0.0, 4.0, 0.0),
        ];
        fill_triangle(&mut fb, points, &FlatShader::new(Rgb::WHITE));
        let near_left = fb.depth(0, 0).unwrap();
        let toward_right = fb.depth(2, 0).unwrap();
        assert!(near_left < toward_right);
        assert!(toward_right < 0.8);
    }
}
