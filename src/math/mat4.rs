//! 4x4 transformation matrix.
//!
//! # Convention
//! - Storage is **row-major**: `data[row][col]`
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: applying `A` then `B` is `B * A * p`
//!
//! The storage layout and the multiply order are one pair. The projection and
//! view builders below are written for this pair; swapping either one alone
//! silently transposes every transform.
//!
//! # Example
//! ```
//! use softrender::math::mat4::Mat4;
//! use softrender::math::vec3::Vec3;
//!
//! let transform = Mat4::translation(1.0, 0.0, 0.0) * Mat4::scaling(2.0, 2.0, 2.0);
//! let p = transform.multiply_point(Vec3::new(1.0, 1.0, 1.0));
//! assert_eq!(p, Vec3::new(3.0, 2.0, 2.0));
//! ```

use std::ops::Mul;

use super::vec3::{Vec3, NORMALIZE_EPSILON};
use super::vec4::Vec4;
use crate::error::{RenderError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the X axis (counter-clockwise looking down +X).
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation by `angle` around an arbitrary axis through the origin
    /// (Rodrigues' formula).
    ///
    /// The axis is normalized first; an axis shorter than `1e-4` is used as is.
    pub fn rotation_axis(axis: Vec3, angle: f32) -> Self {
        let len = axis.length();
        let Vec3 { x, y, z } = if len > NORMALIZE_EPSILON {
            axis / len
        } else {
            axis
        };

        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Mat4::new([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y, 0.0],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x, 0.0],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Euler rotation composed as `rotation_z(roll) * rotation_x(pitch) * rotation_y(yaw)`.
    ///
    /// Yaw is applied first, then pitch, then roll. The order is part of the
    /// contract: [`crate::transform::decompose`] inverts exactly this layout.
    pub fn rotation_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Mat4::rotation_z(roll) * Mat4::rotation_x(pitch) * Mat4::rotation_y(yaw)
    }

    /// OpenGL-style perspective projection.
    ///
    /// View space looks down -Z. Row 3 is `(0, 0, -1, 0)`, so the clip-space
    /// `w` is the view depth and [`Mat4::multiply_point`] performs the
    /// projection divide. Points on the near plane map to NDC z = -1, points
    /// on the far plane to +1.
    ///
    /// # Arguments
    /// * `fov` - Vertical field of view in radians
    /// * `aspect` - Width divided by height
    /// * `near`, `far` - Positive clip plane distances
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov / 2.0).tan();
        Mat4::new([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [
                0.0,
                0.0,
                (far + near) / (near - far),
                (2.0 * far * near) / (near - far),
            ],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// OpenGL-style orthographic projection of the given view box to the NDC cube.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Mat4::new([
            [2.0 / (right - left), 0.0, 0.0, -(right + left) / (right - left)],
            [0.0, 2.0 / (top - bottom), 0.0, -(top + bottom) / (top - bottom)],
            [0.0, 0.0, -2.0 / (far - near), -(far + near) / (far - near)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a world-to-view matrix.
    ///
    /// The basis is `forward = normalize(target - eye)`,
    /// `right = normalize(forward × up)` and `up' = right × forward`. The rows of
    /// the upper-left 3x3 block are `right`, `up'` and `-forward` (the camera
    /// looks down -Z), each translated by `-dot(row, eye)`.
    ///
    /// `up` must not be parallel to the view direction; this is not checked.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);

        Self::new([
            [right.x, right.y, right.z, -right.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut result = [[0.0f32; 4]; 4];
        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[col][row];
            }
        }
        Mat4::new(result)
    }

    /// Matrix inversion has no implementation.
    ///
    /// Always returns [`RenderError::NotImplemented`] so that normal transforms
    /// and decompositions that depend on it fail loudly instead of using a
    /// placeholder identity.
    pub fn inverse(&self) -> Result<Mat4> {
        log::warn!("Mat4::inverse requested but not implemented");
        Err(RenderError::NotImplemented("Mat4::inverse"))
    }

    /// Transforms a point: `(x, y, z, 1)`, then divides by `w` when `|w| > 1e-4`.
    pub fn multiply_point(&self, p: Vec3) -> Vec3 {
        (*self * Vec4::point(p)).to_vec3_perspective()
    }

    /// Transforms a direction: `(x, y, z, 0)`. No translation, no divide.
    pub fn multiply_vector(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::direction(v)).to_vec3()
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Set element at [row][col].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row][col] = value;
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = (0..4).map(|k| self.data[row][k] * rhs.data[k][col]).sum();
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let [x, y, z, w] = self.data.map(|[a, b, c, d]| Vec4::new(a, b, c, d).dot(v));
        Vec4::new(x, y, z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, relative_eq};
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        for row in 0..4 {
            for col in 0..4 {
                assert!(
                    relative_eq!(a.get(row, col), b.get(row, col), epsilon = 1e-5),
                    "mismatch at [{row}][{col}]: {a:?} vs {b:?}"
                );
            }
        }
    }

    fn sample_matrix() -> Mat4 {
        Mat4::translation(1.0, -2.0, 3.0)
            * Mat4::rotation_euler(0.3, -0.7, 1.1)
            * Mat4::scaling(2.0, 0.5, 1.5)
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample_matrix();
        assert_mat_eq(Mat4::identity() * m, m);
        assert_mat_eq(m * Mat4::identity(), m);
    }

    #[test]
    fn multiplication_is_not_commutative() {
        let t = Mat4::translation(5.0, 0.0, 0.0);
        let r = Mat4::rotation_z(FRAC_PI_2);
        let p = Vec3::new(1.0, 0.0, 0.0);

        // Rotate then translate
        let a = (t * r).multiply_point(p);
        assert_relative_eq!(a.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(a.y, 1.0, epsilon = 1e-5);

        // Translate then rotate
        let b = (r * t).multiply_point(p);
        assert_relative_eq!(b.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(b.y, 6.0, epsilon = 1e-5);
    }

    #[test]
    fn rotations_preserve_length() {
        let v = Vec3::new(1.5, -2.0, 0.75);
        let rotations = [
            Mat4::rotation_x(0.4),
            Mat4::rotation_y(-1.3),
            Mat4::rotation_z(2.9),
            Mat4::rotation_axis(Vec3::new(1.0, 2.0, -3.0), FRAC_PI_3),
            Mat4::rotation_euler(0.2, 0.5, -0.8),
        ];
        for r in rotations {
            assert_relative_eq!(r.multiply_vector(v).length(), v.length(), epsilon = 1e-5);
            assert_relative_eq!(r.multiply_point(v).length(), v.length(), epsilon = 1e-5);
        }
    }

    #[test]
    fn axis_rotation_matches_axis_aligned_builders() {
        let angle = 0.83;
        assert_mat_eq(Mat4::rotation_axis(Vec3::X, angle), Mat4::rotation_x(angle));
        assert_mat_eq(Mat4::rotation_axis(Vec3::Y * 4.0, angle), Mat4::rotation_y(angle));
        assert_mat_eq(Mat4::rotation_axis(Vec3::Z, angle), Mat4::rotation_z(angle));
    }

    #[test]
    fn rotation_z_turns_x_into_y() {
        let v = Mat4::rotation_z(FRAC_PI_2).multiply_vector(Vec3::X);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn euler_order_is_yaw_then_pitch_then_roll() {
        let (yaw, pitch, roll) = (0.4, -0.9, 1.7);
        let expected = Mat4::rotation_z(roll) * Mat4::rotation_x(pitch) * Mat4::rotation_y(yaw);
        assert_mat_eq(Mat4::rotation_euler(yaw, pitch, roll), expected);

        let swapped = Mat4::rotation_y(yaw) * Mat4::rotation_x(pitch) * Mat4::rotation_z(roll);
        assert_ne!(Mat4::rotation_euler(yaw, pitch, roll), swapped);
    }

    #[test]
    fn look_at_basis_is_orthonormal() {
        let view = Mat4::look_at(
            Vec3::new(3.0, 4.0, 8.0),
            Vec3::new(-1.0, 0.5, 0.0),
            Vec3::Y,
        );
        let rows: Vec<Vec3> = (0..3)
            .map(|r| Vec3::new(view.get(r, 0), view.get(r, 1), view.get(r, 2)))
            .collect();

        for (i, a) in rows.iter().enumerate() {
            assert_relative_eq!(a.length(), 1.0, epsilon = 1e-5);
            for b in rows.iter().skip(i + 1) {
                assert_relative_eq!(a.dot(*b), 0.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn look_at_maps_eye_to_origin_and_target_down_negative_z() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y);

        let eye_view = view.multiply_point(eye);
        assert_relative_eq!(eye_view.length(), 0.0, epsilon = 1e-5);

        let target_view = view.multiply_point(Vec3::ZERO);
        assert_relative_eq!(target_view.z, -5.0, epsilon = 1e-5);
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let proj = Mat4::perspective(FRAC_PI_4, 1.0, 1.0, 10.0);
        let near = proj.multiply_point(Vec3::new(0.0, 0.0, -1.0));
        let far = proj.multiply_point(Vec3::new(0.0, 0.0, -10.0));
        assert_relative_eq!(near.z, -1.0, epsilon = 1e-5);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn perspective_divides_by_depth() {
        let proj = Mat4::perspective(FRAC_PI_2, 1.0, 0.1, 100.0);
        // With a 90 degree fov, f = 1, so x_ndc = x / -z
        let p = proj.multiply_point(Vec3::new(1.0, 0.5, -2.0));
        assert_relative_eq!(p.x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.25, epsilon = 1e-5);
    }

    #[test]
    fn orthographic_maps_box_to_unit_cube() {
        let ortho = Mat4::orthographic(-4.0, 4.0, -2.0, 2.0, 1.0, 11.0);
        let corner = ortho.multiply_point(Vec3::new(4.0, -2.0, -11.0));
        assert_relative_eq!(corner.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(corner.y, -1.0, epsilon = 1e-5);
        assert_relative_eq!(corner.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn multiply_point_skips_divide_when_w_is_zero() {
        let mut m = Mat4::identity();
        m.set(3, 3, 0.0);
        let p = m.multiply_point(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(p, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn multiply_vector_ignores_translation() {
        let m = Mat4::translation(10.0, 20.0, 30.0);
        assert_eq!(m.multiply_vector(Vec3::X), Vec3::X);
        assert_eq!(m.multiply_point(Vec3::X), Vec3::new(11.0, 20.0, 30.0));
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = sample_matrix();
        let t = m.transpose();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(m.get(row, col), t.get(col, row));
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn inverse_is_not_implemented() {
        // Regression guard: a working inverse must be a deliberate change.
        let result = sample_matrix().inverse();
        assert!(matches!(
            result,
            Err(RenderError::NotImplemented("Mat4::inverse"))
        ));
        assert!(Mat4::identity().inverse().is_err());
    }
}
