//! Parametric mesh builders.
//!
//! The torus and sphere share one grid layout: `(rows + 1) x (cols + 1)`
//! vertices stored row-major, where the last row and column duplicate the seam
//! so texture coordinates can run the full `[0, 1]` range without wrapping.
//! Each grid cell becomes two triangles:
//!
//! ```text
//!   current ---- current+1
//!      |       /    |
//!      |     /      |
//!    next ------- next+1
//! ```
//!
//! `(current, next, current+1)` and `(current+1, next, next+1)` with
//! `next = current + cols + 1`. Both builders are O(rows * cols).
//!
//! Segment counts below 1 are not rejected; they produce an empty or
//! degenerate mesh.

use std::f32::consts::{PI, TAU};

use super::Mesh;
use crate::error::{RenderError, Result};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Emits the two-triangles-per-cell index buffer for a `rows x cols` grid.
///
/// With `flip` set the last two indices of every triangle are swapped, which
/// reverses the winding without changing the split.
fn grid_indices(rows: u32, cols: u32, flip: bool) -> Vec<u32> {
    let mut indices = Vec::with_capacity(rows as usize * cols as usize * 6);
    for i in 0..rows {
        for j in 0..cols {
            let current = i * (cols + 1) + j;
            let next = current + cols + 1;

            for [a, b, c] in [[current, next, current + 1], [current + 1, next, next + 1]] {
                if flip {
                    indices.extend_from_slice(&[a, c, b]);
                } else {
                    indices.extend_from_slice(&[a, b, c]);
                }
            }
        }
    }
    indices
}

/// Builds a torus around the Z axis.
///
/// `u` runs around the major circle and `v` around the tube. Normals are the
/// analytic outward normals `(cos v cos u, cos v sin u, sin v)`; texture
/// coordinates are `(i / major_segments, j / minor_segments)`.
///
/// Produces `(major_segments + 1) * (minor_segments + 1)` vertices and
/// `major_segments * minor_segments * 6` indices.
pub fn generate_torus(
    major_radius: f32,
    minor_radius: f32,
    major_segments: u32,
    minor_segments: u32,
) -> Mesh {
    let vertex_count = (major_segments as usize + 1) * (minor_segments as usize + 1);
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut tex_coords = Vec::with_capacity(vertex_count);

    for i in 0..=major_segments {
        let s = i as f32 / major_segments as f32;
        let (sin_u, cos_u) = (s * TAU).sin_cos();

        for j in 0..=minor_segments {
            let t = j as f32 / minor_segments as f32;
            let (sin_v, cos_v) = (t * TAU).sin_cos();

            let ring = major_radius + minor_radius * cos_v;
            positions.push(Vec3::new(ring * cos_u, ring * sin_u, minor_radius * sin_v));
            normals.push(Vec3::new(cos_v * cos_u, cos_v * sin_u, sin_v));
            tex_coords.push(Vec2::new(s, t));
        }
    }

    let indices = grid_indices(major_segments, minor_segments, false);
    log::debug!(
        "generated torus: {} vertices, {} triangles",
        positions.len(),
        indices.len() / 3
    );
    Mesh::new("torus", positions, normals, tex_coords, indices)
}

/// Builds a UV sphere centered at the origin with +Y as the pole axis.
///
/// `theta = i / rings * π` runs from the north pole to the south pole and
/// `phi = j / segments * 2π` around it. The position is
/// `r * (sin θ cos φ, cos θ, sin θ sin φ)` and the normal is the position
/// divided by `r`. Texture coordinates are `(j / segments, i / rings)`.
///
/// Triangles are counter-clockwise seen from outside, like the torus and cube.
/// To get there each cell is split like the torus grid but with the last two
/// indices of every triangle swapped: `(c, c+1, next)` and
/// `(c+1, next+1, next)` with `next = c + segments + 1`.
pub fn generate_sphere(radius: f32, segments: u32, rings: u32) -> Mesh {
    let vertex_count = (segments as usize + 1) * (rings as usize + 1);
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut tex_coords = Vec::with_capacity(vertex_count);

    for i in 0..=rings {
        let v = i as f32 / rings as f32;
        let (sin_theta, cos_theta) = (v * PI).sin_cos();

        for j in 0..=segments {
            let u = j as f32 / segments as f32;
            let (sin_phi, cos_phi) = (u * TAU).sin_cos();

            let normal = Vec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);
            positions.push(normal * radius);
            normals.push(normal);
            tex_coords.push(Vec2::new(u, v));
        }
    }

    // theta grows toward -Y and phi toward +Z, so the plain split winds
    // clockwise seen from outside
    let indices = grid_indices(rings, segments, true);
    log::debug!(
        "generated sphere: {} vertices, {} triangles",
        positions.len(),
        indices.len() / 3
    );
    Mesh::new("sphere", positions, normals, tex_coords, indices)
}

/// Builds an axis-aligned cube of edge length `size` centered at the origin.
///
/// Every face has its own four vertices so normals stay flat: 24 vertices
/// and 36 indices, counter-clockwise when seen from outside.
pub fn generate_cube(size: f32) -> Mesh {
    let h = size / 2.0;

    // (normal, tangent u, tangent v) per face; u x v == normal
    let faces = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (-Vec3::Z, -Vec3::X, Vec3::Y),
        (Vec3::Y, Vec3::X, -Vec3::Z),
        (-Vec3::Y, Vec3::X, Vec3::Z),
        (Vec3::X, -Vec3::Z, Vec3::Y),
        (-Vec3::X, Vec3::Z, Vec3::Y),
    ];
    let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
    let uvs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut tex_coords = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in faces {
        let base = positions.len() as u32;
        for (&(a, b), &uv) in corners.iter().zip(uvs.iter()) {
            positions.push((normal + u * a + v * b) * h);
            normals.push(normal);
            tex_coords.push(uv);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    Mesh::new("cube", positions, normals, tex_coords, indices)
}

/// Cylinder builder. Not implemented.
pub fn generate_cylinder(radius: f32, height: f32, segments: u32) -> Result<Mesh> {
    log::warn!(
        "generate_cylinder(radius={}, height={}, segments={}) is not implemented",
        radius,
        height,
        segments
    );
    Err(RenderError::NotImplemented("generate_cylinder"))
}

/// Cone builder. Not implemented.
pub fn generate_cone(radius: f32, height: f32, segments: u32) -> Result<Mesh> {
    log::warn!(
        "generate_cone(radius={}, height={}, segments={}) is not implemented",
        radius,
        height,
        segments
    );
    Err(RenderError::NotImplemented("generate_cone"))
}

/// Subdivided plane builder. Not implemented.
pub fn generate_plane(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Result<Mesh> {
    log::warn!(
        "generate_plane({}x{}, {}x{} segments) is not implemented",
        width,
        height,
        segments_x,
        segments_y
    );
    Err(RenderError::NotImplemented("generate_plane"))
}
