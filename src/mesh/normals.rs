//! Surface normal computation.

use crate::math::vec3::Vec3;

/// Unit normal of the triangle `v0 v1 v2` (counter-clockwise front face).
///
/// Degenerate triangles return [`Vec3::ZERO`].
pub fn triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize()
}

/// Unit normal of a planar (or nearly planar) polygon using Newell's method.
///
/// Falls back to +Z when there are fewer than three vertices or the
/// polygon has no area.
pub fn polygon_normal(vertices: &[Vec3]) -> Vec3 {
    if vertices.len() < 3 {
        return Vec3::Z;
    }

    let mut normal = Vec3::ZERO;
    for (i, current) in vertices.iter().enumerate() {
        let next = vertices[(i + 1) % vertices.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    let normal = normal.normalize();
    if normal == Vec3::ZERO {
        Vec3::Z
    } else {
        normal
    }
}

/// Per-vertex normals averaged from the faces sharing each vertex.
///
/// Face normals are accumulated unnormalized, so larger faces weigh more.
/// Vertices not referenced by any triangle get [`Vec3::ZERO`]. Triangles with
/// an out-of-range index are skipped.
pub fn face_averaged(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] = normals[a] + face;
        normals[b] = normals[b] + face;
        normals[c] = normals[c] + face;
    }

    for n in &mut normals {
        *n = n.normalize();
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn triangle_normal_follows_winding() {
        assert_eq!(triangle_normal(Vec3::ZERO, Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(triangle_normal(Vec3::ZERO, Vec3::Y, Vec3::X), -Vec3::Z);
    }

    #[test]
    fn degenerate_triangle_has_zero_normal() {
        let n = triangle_normal(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert_eq!(n, Vec3::ZERO);
    }

    #[test]
    fn newell_normal_of_tilted_quad() {
        // Unit square in the XZ plane, counter-clockwise seen from +Y
        let quad = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        let n = polygon_normal(&quad);
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 1.0);
        assert_relative_eq!(n.z, 0.0);
    }

    #[test]
    fn polygon_normal_fallbacks() {
        assert_eq!(polygon_normal(&[Vec3::ZERO, Vec3::X]), Vec3::Z);
        assert_eq!(polygon_normal(&[Vec3::ZERO, Vec3::X, Vec3::X * 3.0]), Vec3::Z);
    }

    #[test]
    fn shared_vertex_averages_adjacent_faces() {
        // Two faces folded along the X axis: one facing +Z, one facing +Y
        let positions = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        ];
        let indices = [0, 1, 2, 0, 1, 3];
        let normals = face_averaged(&positions, &indices);

        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(normals[0].y, s, epsilon = 1e-6);
        assert_relative_eq!(normals[0].z, s, epsilon = 1e-6);
        assert_eq!(normals[2], Vec3::Z);
        assert_eq!(normals[3], Vec3::Y);
    }

    #[test]
    fn unreferenced_vertices_stay_zero() {
        let normals = face_averaged(&[Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE], &[0, 1, 2]);
        assert_eq!(normals[3], Vec3::ZERO);
    }
}
