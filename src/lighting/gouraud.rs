//! Gouraud shading: per-vertex diffuse lighting with barycentric color blending.

use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Triangles whose doubled area is below this are treated as degenerate.
pub const DEGENERATE_EPSILON: f32 = 1e-4;

/// Diffuse color of a vertex lit by a point light:
/// `light_color * max(0, N·L)`, each channel capped at 1.
pub fn vertex_color(position: Vec3, normal: Vec3, light_pos: Vec3, light_color: Color) -> Color {
    let to_light = (light_pos - position).normalize();
    let diffuse = normal.normalize().dot(to_light).max(0.0);
    (light_color * diffuse).clamp01()
}

/// Barycentric weights of `p` in the 2D triangle `verts`.
///
/// Returns `None` for degenerate triangles. The weights sum to 1; they are all
/// in `[0, 1]` only when `p` is inside the triangle.
pub fn barycentric(p: Vec2, verts: [Vec2; 3]) -> Option<[f32; 3]> {
    let [v0, v1, v2] = verts;
    let denom = (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y);
    if denom.abs() < DEGENERATE_EPSILON {
        return None;
    }

    let w0 = ((v1.y - v2.y) * (p.x - v2.x) + (v2.x - v1.x) * (p.y - v2.y)) / denom;
    let w1 = ((v2.y - v0.y) * (p.x - v2.x) + (v0.x - v2.x) * (p.y - v2.y)) / denom;
    Some([w0, w1, 1.0 - w0 - w1])
}

/// Blends per-vertex colors at `p`. Degenerate triangles yield `colors[0]`.
pub fn interpolate_color(p: Vec2, verts: [Vec2; 3], colors: [Color; 3]) -> Color {
    match barycentric(p, verts) {
        Some(w) => blend(w, colors),
        None => colors[0],
    }
}

/// Weighted sum of three colors.
#[inline]
pub fn blend(weights: [f32; 3], colors: [Color; 3]) -> Color {
    colors[0] * weights[0] + colors[1] * weights[1] + colors[2] * weights[2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TRI: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)];

    #[test]
    fn facing_light_gets_full_color() {
        let c = vertex_color(Vec3::ZERO, Vec3::Y, Vec3::new(0.0, 4.0, 0.0), Color::WHITE);
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn facing_away_is_black() {
        let c = vertex_color(Vec3::ZERO, -Vec3::Y, Vec3::new(0.0, 4.0, 0.0), Color::WHITE);
        assert_eq!(c, Color::BLACK);
    }

    #[test]
    fn bright_light_is_clamped() {
        let c = vertex_color(Vec3::ZERO, Vec3::Y, Vec3::Y, Color::new(3.0, 0.5, 0.0));
        assert_eq!(c, Color::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn barycentric_of_vertices_and_centroid() {
        let w = barycentric(TRI[1], TRI).unwrap();
        assert_relative_eq!(w[0], 0.0);
        assert_relative_eq!(w[1], 1.0);
        assert_relative_eq!(w[2], 0.0);

        let centroid = Vec2::new(10.0 / 3.0, 10.0 / 3.0);
        for wi in barycentric(centroid, TRI).unwrap() {
            assert_relative_eq!(wi, 1.0 / 3.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn interpolation_reproduces_vertex_colors() {
        let colors = [Color::new(1.0, 0.0, 0.0), Color::new(0.0, 1.0, 0.0), Color::new(0.0, 0.0, 1.0)];
        for (v, c) in TRI.iter().zip(colors) {
            let got = interpolate_color(*v, TRI, colors);
            assert_relative_eq!(got.r, c.r, epsilon = 1e-6);
            assert_relative_eq!(got.g, c.g, epsilon = 1e-6);
            assert_relative_eq!(got.b, c.b, epsilon = 1e-6);
        }

        let mid = interpolate_color(Vec2::new(5.0, 0.0), TRI, colors);
        assert_relative_eq!(mid.r, 0.5, epsilon = 1e-6);
        assert_relative_eq!(mid.g, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_triangle_uses_first_color() {
        let line = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)];
        let colors = [Color::WHITE, Color::BLACK, Color::BLACK];
        assert!(barycentric(Vec2::new(1.0, 1.0), line).is_none());
        assert_eq!(interpolate_color(Vec2::new(1.0, 1.0), line, colors), Color::WHITE);
    }
}
