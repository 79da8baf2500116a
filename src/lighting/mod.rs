//! Lighting models.
//!
//! Both models light a surface with a single point [`Light`]:
//!
//! - [`gouraud`]: diffuse color computed once per vertex and blended across
//!   the triangle with barycentric weights.
//! - [`phong`]: ambient, diffuse and specular terms evaluated per pixel from an
//!   interpolated normal.
//!
//! All directions are derived from positions, so callers pass world-space
//! positions and unit (or at least non-zero) normals.

pub mod gouraud;
pub mod phong;

use crate::colors::Color;
use crate::math::vec3::Vec3;

/// Strength of the ambient term in [`phong::shade`].
pub const AMBIENT_STRENGTH: f32 = 0.1;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    /// Multiplier applied to the diffuse and specular terms.
    pub intensity: f32,
}

impl Default for Light {
    /// White light of unit intensity above and in front of the origin.
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 5.0, 5.0),
            color: Color::WHITE,
            intensity: 1.0,
        }
    }
}

impl Light {
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// Unit vector from `point` toward the light.
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        (self.position - point).normalize()
    }
}

/// Surface reflectance for [`phong::shade`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Specular exponent; larger is a tighter highlight.
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::WHITE,
            diffuse: Color::gray(0.8),
            specular: Color::gray(0.5),
            shininess: 32.0,
        }
    }
}

impl Material {
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// A material whose ambient and diffuse colors are both `color`.
    pub fn colored(color: Color) -> Self {
        Self {
            ambient: color,
            diffuse: color,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn direction_points_at_light() {
        let light = Light::new(Vec3::new(0.0, 10.0, 0.0), Color::WHITE, 1.0);
        let dir = light.direction_from(Vec3::ZERO);
        assert_relative_eq!(dir.y, 1.0);
    }

    #[test]
    fn colored_material_keeps_specular_defaults() {
        let m = Material::colored(Color::new(1.0, 0.0, 0.0));
        assert_eq!(m.diffuse, Color::new(1.0, 0.0, 0.0));
        assert_eq!(m.specular, Material::default().specular);
    }
}
