//! Phong reflection model.

use super::{Light, Material, AMBIENT_STRENGTH};
use crate::colors::Color;
use crate::math::vec3::Vec3;

/// Reflects `incident` (pointing away from the surface) about `normal`:
/// `2N(N·I) - I`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    normal * (2.0 * normal.dot(incident)) - incident
}

/// Color of a surface point lit by `light` and seen from `view_pos`.
///
/// ```text
/// ambient * 0.1
///   + diffuse  * light.color * max(0, N·L) * intensity
///   + specular * light.color * max(0, V·R)^shininess * intensity
/// ```
///
/// Every channel is clamped to `[0, 1]`.
pub fn shade(position: Vec3, normal: Vec3, view_pos: Vec3, light: &Light, material: &Material) -> Color {
    let n = normal.normalize();
    let l = light.direction_from(position);
    let v = (view_pos - position).normalize();
    let r = reflect(l, n).normalize();

    let ambient = material.ambient * AMBIENT_STRENGTH;

    let diff = n.dot(l).max(0.0);
    let diffuse = material.diffuse * light.color * (diff * light.intensity);

    let spec = v.dot(r).max(0.0).powf(material.shininess);
    let specular = material.specular * light.color * (spec * light.intensity);

    (ambient + diffuse + specular).clamp01()
}
