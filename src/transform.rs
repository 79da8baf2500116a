//! Affine transforms.
//!
//! Provides a [`Transform`] struct with a fluent API for position, rotation
//! (Euler angles) and scale, plus free functions to apply matrices to points,
//! directions and normals, to compose and decompose TRS matrices, and to rotate
//! points about an axis or a pivot.

use crate::error::Result;
use crate::math::{mat4::Mat4, vec3::Vec3};

/// A 3D transform with position, rotation (Euler angles), and scale.
///
/// Provides a fluent API where mutating methods return `&mut Self` for chaining:
///
/// ```
/// # use softrender::transform::Transform;
/// let mut transform = Transform::new();
/// transform
///     .set_position_xyz(5.0, 2.0, 0.0)
///     .rotate_y(0.1)
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3, // Euler angles in radians: x=pitch, y=yaw, z=roll
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0, rotation=0, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Position ============

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    // ============ Rotation ============

    /// Get the rotation (Euler angles in radians: x=pitch, y=yaw, z=roll).
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Rotate around the X axis (pitch).
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotation.x += angle;
        self
    }

    /// Rotate around the Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation.y += angle;
        self
    }

    /// Rotate around the Z axis (roll).
    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        self.rotation.z += angle;
        self
    }

    // ============ Scale ============

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Set uniform scale (same value for x, y, z).
    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    // ============ Matrix Generation ============

    /// Generate the transformation matrix, see [`compose`].
    pub fn to_matrix(&self) -> Mat4 {
        compose(self.position, self.rotation, self.scale)
    }
}

/// Applies `transform` to a point, including the perspective divide.
pub fn transform_point(transform: &Mat4, point: Vec3) -> Vec3 {
    transform.multiply_point(point)
}

/// Applies `transform` to a direction (no translation).
pub fn transform_vector(transform: &Mat4, vector: Vec3) -> Vec3 {
    transform.multiply_vector(vector)
}

/// Transforms a surface normal by the inverse transpose of `transform` and
/// renormalizes it.
///
/// Depends on [`Mat4::inverse`] and therefore currently returns its
/// `NotImplemented` error.
pub fn transform_normal(transform: &Mat4, normal: Vec3) -> Result<Vec3> {
    let inverse_transpose = transform.inverse()?.transpose();
    Ok(inverse_transpose.multiply_vector(normal).normalize())
}

/// Builds `T * R * S`: scale first, then the Euler rotation, then translation.
///
/// `rotation` holds Euler angles in radians (x=pitch, y=yaw, z=roll) and is
/// expanded with [`Mat4::rotation_euler`].
pub fn compose(translation: Vec3, rotation: Vec3, scale: Vec3) -> Mat4 {
    Mat4::translation(translation.x, translation.y, translation.z)
        * Mat4::rotation_euler(rotation.y, rotation.x, rotation.z)
        * Mat4::scaling(scale.x, scale.y, scale.z)
}

/// Splits a matrix built by [`compose`] back into translation, rotation and scale.
///
/// Scale is recovered from the column lengths of the upper 3x3 block, so
/// negative scales come back positive (with the sign folded into the
/// rotation). Angles are exact for pitch in `(-π/2, π/2)`; at gimbal lock
/// yaw and roll are not separable and the split is arbitrary.
pub fn decompose(transform: &Mat4) -> Transform {
    let m = |row: usize, col: usize| transform.get(row, col);

    let position = Vec3::new(m(0, 3), m(1, 3), m(2, 3));

    let column_length = |col: usize| Vec3::new(m(0, col), m(1, col), m(2, col)).length();
    let scale = Vec3::new(column_length(0), column_length(1), column_length(2));

    // Pure rotation entries r[row][col] = m[row][col] / scale[col]
    let safe = |s: f32| if s.abs() > f32::EPSILON { s } else { 1.0 };
    let r = |row: usize, col: usize| m(row, col) / safe(scale.to_array()[col]);

    // Rz(roll) * Rx(pitch) * Ry(yaw) has row 2 = (-cos(p)sin(y), sin(p), cos(p)cos(y))
    // and column 1 = (-sin(r)cos(p), cos(r)cos(p), sin(p)).
    let pitch = r(2, 1).clamp(-1.0, 1.0).asin();
    let yaw = (-r(2, 0)).atan2(r(2, 2));
    let roll = (-r(0, 1)).atan2(r(1, 1));

    Transform {
        position,
        rotation: Vec3::new(pitch, yaw, roll),
        scale,
    }
}

/// Rotates `point` by `angle` around `axis` through the origin.
pub fn rotate_point_around_axis(point: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    Mat4::rotation_axis(axis, angle).multiply_point(point)
}

/// Rotates `point` by `angle` around the line through `center` along `axis`.
pub fn rotate_point_around_point(point: Vec3, center: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    rotate_point_around_axis(point - center, axis, angle) + center
}
