//! Look-at camera.
//!
//! # Coordinate System
//!
//! Right-handed, OpenGL style:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer (the camera looks down -Z in view space)
//!
//! The camera stores its extrinsic parameters (position, target, up) and a
//! [`Projection`]. Matrices are not cached: every call recomputes them from the
//! current fields, so a setter takes effect on the next call.

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::projection::Projection;

/// Camera defined by a position, a point it looks at and an up vector.
///
/// `up` must not be parallel to `target - position`. This is a precondition,
/// not checked: a parallel up vector yields a degenerate view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    projection: Projection,
}

impl Default for Camera {
    /// Camera at `(0, 0, 5)` looking at the origin with +Y up, 45 degree FOV,
    /// 16:9 aspect, planes at 0.1 and 100.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection: Projection::default(),
        }
    }
}

impl Camera {
    /// Creates a camera at `position` looking toward `target` with +Y up and
    /// the default projection.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            ..Self::default()
        }
    }

    // =========================================================================
    // Extrinsics
    // =========================================================================

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_target(&mut self, target: Vec3) -> &mut Self {
        self.target = target;
        self
    }

    pub fn set_up(&mut self, up: Vec3) -> &mut Self {
        self.up = up;
        self
    }

    /// Unit vector from the position toward the target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    // =========================================================================
    // Intrinsics
    // =========================================================================

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }

    /// Sets the perspective parameters. `fov_degrees` is the vertical field
    /// of view in degrees.
    pub fn set_projection(
        &mut self,
        fov_degrees: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    ) -> &mut Self {
        self.projection = Projection::from_degrees(fov_degrees, aspect_ratio, z_near, z_far);
        self
    }

    // =========================================================================
    // Derived matrices
    // =========================================================================

    /// World-to-view matrix: `Mat4::look_at(position, target, up)`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Perspective matrix from the current projection parameters.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// `projection * view`: takes world-space points to clip space.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert_relative_eq!(camera.forward().z, -1.0, epsilon = 1e-6);
        assert_eq!(camera.view_matrix(), Mat4::look_at(camera.position(), Vec3::ZERO, Vec3::Y));
    }

    #[test]
    fn view_matrix_places_target_in_front() {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO);
        let origin = camera.view_matrix().multiply_point(Vec3::ZERO);
        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(origin.z, -5.0, epsilon = 1e-5);
    }

    #[test]
    fn setters_change_derived_matrices_immediately() {
        let mut camera = Camera::default();
        let view_before = camera.view_matrix();
        let proj_before = camera.projection_matrix();

        camera.set_position(Vec3::new(2.0, 1.0, 5.0));
        assert_ne!(camera.view_matrix(), view_before);

        camera.set_projection(60.0, 1.0, 0.5, 50.0);
        assert_ne!(camera.projection_matrix(), proj_before);
        assert_relative_eq!(camera.projection().fov_y(), 60f32.to_radians(), epsilon = 1e-6);
    }

    #[test]
    fn view_projection_keeps_target_at_screen_center() {
        let camera = Camera::looking_at(Vec3::new(3.0, 2.0, 4.0), Vec3::new(0.0, 0.5, 0.0));
        let ndc = camera.view_projection().multiply_point(camera.target());
        assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }
}
